//! Break-even and profit/loss bounds of a strategy held to expiry.
//!
//! The payoff is piecewise linear with kinks only at strikes, so evaluating it
//! at the strikes plus the scan-range edges is exact: zero crossings are found
//! by linear interpolation between adjacent breakpoints, and extrema always lie
//! on a breakpoint. Whether profit or loss is unbounded as the underlying rises
//! is decided by the sign of the net call exposure.

use std::cmp::Ordering;

use tracing::warn;

use super::payoff::{net_premium, strategy_payoff};
use super::types::{OptionLeg, Position, PriceRange, Strategy};
use crate::models::types::OptionType;

/// Payoffs with smaller magnitude than this count as exactly zero.
const ZERO_PAYOFF: f64 = 1e-9;

/// Best and worst payoff at expiry. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfitLoss {
    pub max_profit: Option<f64>,
    pub max_loss: Option<f64>,
}

/// Summary of a strategy's risk profile at expiry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyAnalysis {
    pub net_premium: f64,
    pub break_evens: Vec<f64>,
    pub max_profit: Option<f64>,
    pub max_loss: Option<f64>,
    /// `max_profit / |max_loss|` when both are bounded and the loss is non-zero
    pub risk_reward_ratio: Option<f64>,
}

/// `Σ quantity * sign` over call legs. Positive means net long calls.
pub fn net_call_exposure(legs: &[OptionLeg]) -> i64 {
    legs.iter()
        .filter(|leg| leg.option_type == OptionType::Call)
        .map(|leg| match leg.position {
            Position::Long => leg.quantity as i64,
            Position::Short => -(leg.quantity as i64),
        })
        .sum()
}

/// Use `range` when it is a valid window, otherwise the default window around `spot`.
fn resolve_range(spot: f64, range: &PriceRange) -> PriceRange {
    if range.is_valid() {
        return *range;
    }
    let fallback = PriceRange::default_for(spot);
    warn!(
        min = range.min,
        max = range.max,
        spot,
        "invalid price range, scanning the default window around spot"
    );
    fallback
}

/// Sorted, de-duplicated evaluation points: range edges plus strikes inside the range.
fn breakpoints(legs: &[OptionLeg], range: &PriceRange) -> Vec<f64> {
    let mut points: Vec<f64> = legs
        .iter()
        .map(|leg| leg.strike)
        .filter(|&strike| range.min < strike && strike < range.max)
        .collect();
    points.push(range.min);
    points.push(range.max);
    points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    points.dedup();
    points
}

/// Underlying prices inside `range` where the payoff at expiry is zero, ascending.
///
/// An invalid `range` is replaced by ±50% around `spot`.
pub fn find_break_evens(legs: &[OptionLeg], spot: f64, range: &PriceRange) -> Vec<f64> {
    if legs.is_empty() {
        return Vec::new();
    }
    let range = resolve_range(spot, range);
    let samples: Vec<(f64, f64)> = breakpoints(legs, &range)
        .into_iter()
        .map(|price| (price, strategy_payoff(legs, price)))
        .collect();

    let mut crossings: Vec<f64> = Vec::new();
    for (i, &(x0, y0)) in samples.iter().enumerate() {
        if y0.abs() < ZERO_PAYOFF {
            crossings.push(x0);
            continue;
        }
        if let Some(&(x1, y1)) = samples.get(i + 1) {
            if y1.abs() >= ZERO_PAYOFF && y0.signum() != y1.signum() {
                crossings.push(x0 + y0 * (x1 - x0) / (y0 - y1));
            }
        }
    }

    crossings.dedup_by(|a, b| (*a - *b).abs() < ZERO_PAYOFF);
    crossings
}

/// Maximum profit and maximum loss at expiry.
///
/// - net long calls: profit unbounded, loss is the minimum over the strikes and `range.min`
/// - net short calls: loss unbounded, profit is the maximum over the strikes and `range.min`
/// - balanced calls: both bounded, taken over the strikes and both range edges
///
/// Puts are always bounded because the underlying cannot fall below zero.
pub fn max_profit_loss(legs: &[OptionLeg], spot: f64, range: &PriceRange) -> ProfitLoss {
    let range = resolve_range(spot, range);
    let exposure = net_call_exposure(legs);

    let mut prices: Vec<f64> = legs.iter().map(|leg| leg.strike).collect();
    prices.push(range.min);
    if exposure == 0 {
        prices.push(range.max);
    }

    let payoffs = prices.iter().map(|&price| strategy_payoff(legs, price));
    let highest = payoffs.clone().fold(f64::NEG_INFINITY, f64::max);
    let lowest = payoffs.fold(f64::INFINITY, f64::min);

    match exposure.cmp(&0) {
        Ordering::Greater => ProfitLoss {
            max_profit: None,
            max_loss: Some(lowest),
        },
        Ordering::Less => ProfitLoss {
            max_profit: Some(highest),
            max_loss: None,
        },
        Ordering::Equal => ProfitLoss {
            max_profit: Some(highest),
            max_loss: Some(lowest),
        },
    }
}

/// Net premium, break-evens and profit/loss bounds in one pass.
pub fn analyze_strategy(strategy: &Strategy, range: &PriceRange) -> StrategyAnalysis {
    let spot = strategy.underlying_price;
    let bounds = max_profit_loss(&strategy.legs, spot, range);

    let risk_reward_ratio = match (bounds.max_profit, bounds.max_loss) {
        (Some(profit), Some(loss)) if loss < 0.0 => Some(profit / loss.abs()),
        _ => None,
    };

    StrategyAnalysis {
        net_premium: net_premium(&strategy.legs),
        break_evens: find_break_evens(&strategy.legs, spot, range),
        max_profit: bounds.max_profit,
        max_loss: bounds.max_loss,
        risk_reward_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn leg(option_type: OptionType, position: Position, strike: f64, premium: f64) -> OptionLeg {
        OptionLeg::new(format!("{option_type}-{strike}"), option_type, position, strike, premium)
    }

    #[test]
    fn test_net_call_exposure_ignores_puts() {
        let legs = vec![
            leg(OptionType::Call, Position::Long, 100.0, 3.0).with_quantity(2),
            leg(OptionType::Call, Position::Short, 110.0, 1.0),
            leg(OptionType::Put, Position::Short, 90.0, 1.0).with_quantity(5),
        ];
        assert_eq!(net_call_exposure(&legs), 1);
    }

    #[test]
    fn test_breakpoints_sorted_and_unique() {
        let legs = vec![
            leg(OptionType::Call, Position::Long, 110.0, 1.0),
            leg(OptionType::Put, Position::Long, 90.0, 1.0),
            leg(OptionType::Put, Position::Short, 90.0, 1.0),
            leg(OptionType::Put, Position::Short, 300.0, 1.0),
        ];
        let points = breakpoints(&legs, &PriceRange::new(50.0, 150.0));
        assert_eq!(points, vec![50.0, 90.0, 110.0, 150.0]);
    }

    #[test]
    fn test_flat_zero_segment_reports_both_ends() {
        // payoff is zero from the strike upwards
        let legs = vec![leg(OptionType::Put, Position::Long, 100.0, 0.0)];
        let break_evens = find_break_evens(&legs, 100.0, &PriceRange::new(50.0, 150.0));
        assert_eq!(break_evens, vec![100.0, 150.0]);
    }

    #[test]
    fn test_invalid_range_falls_back_to_default_window() {
        let legs = vec![leg(OptionType::Call, Position::Long, 100.0, 5.0)];
        let break_evens = find_break_evens(&legs, 100.0, &PriceRange::new(120.0, 80.0));
        assert_eq!(break_evens.len(), 1);
        assert_abs_diff_eq!(break_evens[0], 105.0, epsilon = 1e-12);
    }

    #[test]
    fn test_short_call_loss_is_unbounded() {
        let legs = vec![leg(OptionType::Call, Position::Short, 100.0, 4.0)];
        let bounds = max_profit_loss(&legs, 100.0, &PriceRange::new(50.0, 150.0));
        assert_eq!(bounds.max_loss, None);
        assert_eq!(bounds.max_profit, Some(4.0));
    }

    #[test]
    fn test_risk_reward_ratio() {
        let strategy = Strategy::new(
            "Bull Put Spread",
            vec![
                leg(OptionType::Put, Position::Short, 100.0, 3.0),
                leg(OptionType::Put, Position::Long, 95.0, 1.5),
            ],
            100.0,
        );
        let analysis = analyze_strategy(&strategy, &PriceRange::new(50.0, 150.0));
        assert_abs_diff_eq!(analysis.risk_reward_ratio.unwrap(), 1.5 / 3.5, epsilon = 1e-12);
        assert_eq!(analysis.net_premium, 1.5);
        assert_eq!(analysis.break_evens.len(), 1);
        assert_abs_diff_eq!(analysis.break_evens[0], 98.5, epsilon = 1e-12);
    }
}
