//! Mark-to-model valuation of a strategy before expiry.
//!
//! Each leg is priced with Black-Scholes-Merton under a shared
//! [`MarketScenario`]. Position P/L and Greeks are weighted by
//! `quantity * sign(position)`.

use tracing::debug;

use super::payoff::{sample_prices, strategy_payoff};
use super::types::{OptionLeg, PriceRange};
use crate::config::MarketScenario;
use crate::error::PricingError;
use crate::models::bs::bs_price_and_greeks;
use crate::models::types::{Greeks, OptionParams};
use crate::models::utils::days_to_years;

/// Theoretical value and risk of a single leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegValuation {
    pub id: String,
    /// Model price per contract
    pub theoretical_value: f64,
    /// Greeks per contract, long-side signs
    pub greeks: Greeks,
    /// `quantity * sign * (theoretical_value - premium)`
    pub pnl: f64,
    /// Greeks weighted by `quantity * sign`
    pub position_greeks: Greeks,
}

/// Current P/L and aggregate Greeks of all legs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionAnalysis {
    pub legs: Vec<LegValuation>,
    pub total_pnl: f64,
    pub greeks: Greeks,
}

/// A point on the P/L chart: payoff at expiry next to the current model P/L.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlPoint {
    pub price: f64,
    pub expiry_payoff: f64,
    pub current_pnl: f64,
}

fn leg_params(leg: &OptionLeg, spot: f64, scenario: &MarketScenario) -> OptionParams {
    let remaining_days = (leg.expiry_days as f64 - scenario.days_elapsed).max(0.0);
    OptionParams::new(
        leg.option_type,
        spot,
        leg.strike,
        days_to_years(remaining_days),
        scenario.risk_free_rate,
        scenario.dividend_yield,
        scenario.volatility,
    )
}

/// Value every leg at `spot` and aggregate P/L and Greeks.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] if any leg cannot be priced (non-positive
/// spot or strike, negative scenario volatility, non-finite input).
pub fn value_position(
    legs: &[OptionLeg],
    spot: f64,
    scenario: &MarketScenario,
) -> Result<PositionAnalysis, PricingError> {
    let valuations = legs
        .iter()
        .map(|leg| {
            let (theoretical_value, greeks) = bs_price_and_greeks(&leg_params(leg, spot, scenario))?;
            let weight = leg.signed_quantity();
            Ok(LegValuation {
                id: leg.id.clone(),
                theoretical_value,
                greeks,
                pnl: weight * (theoretical_value - leg.premium),
                position_greeks: greeks.scaled(weight),
            })
        })
        .collect::<Result<Vec<_>, PricingError>>()?;

    let total_pnl: f64 = valuations.iter().map(|v| v.pnl).sum();
    let greeks: Greeks = valuations.iter().map(|v| v.position_greeks).sum();

    debug!(
        legs = valuations.len(),
        spot,
        total_pnl,
        "valued position"
    );

    Ok(PositionAnalysis {
        legs: valuations,
        total_pnl,
        greeks,
    })
}

/// Current P/L and expiry payoff sampled at `steps + 1` prices across `range`.
pub fn pnl_curve(
    legs: &[OptionLeg],
    range: &PriceRange,
    steps: usize,
    scenario: &MarketScenario,
) -> Result<Vec<PnlPoint>, PricingError> {
    sample_prices(range, steps)
        .map(|price| {
            let current_pnl = value_position(legs, price, scenario)?.total_pnl;
            Ok(PnlPoint {
                price,
                expiry_payoff: strategy_payoff(legs, price),
                current_pnl,
            })
        })
        .collect()
}
