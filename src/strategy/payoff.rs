//! Payoff at expiry for single legs and whole strategies.
//!
//! The aggregate payoff is piecewise linear in the underlying price with kinks
//! only at the legs' strikes.

use super::types::{OptionLeg, PriceRange};
use crate::models::utils::intrinsic_value;

/// A sampled point of the payoff-at-expiry curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    pub price: f64,
    pub payoff: f64,
}

/// Payoff of one leg at expiry: `quantity * sign * (intrinsic - premium)`.
pub fn leg_payoff(leg: &OptionLeg, spot: f64) -> f64 {
    let intrinsic = intrinsic_value(leg.option_type, spot, leg.strike);
    leg.signed_quantity() * (intrinsic - leg.premium)
}

/// Sum of [`leg_payoff`] over all legs.
pub fn strategy_payoff(legs: &[OptionLeg], spot: f64) -> f64 {
    legs.iter().map(|leg| leg_payoff(leg, spot)).sum()
}

/// Premium received minus premium paid. Positive is a net credit, negative a net debit.
pub fn net_premium(legs: &[OptionLeg]) -> f64 {
    legs.iter()
        .map(|leg| -leg.signed_quantity() * leg.premium)
        .sum()
}

/// Evenly spaced samples of the payoff curve, `steps + 1` points including both ends.
pub fn payoff_curve(legs: &[OptionLeg], range: &PriceRange, steps: usize) -> Vec<PayoffPoint> {
    sample_prices(range, steps)
        .map(|price| PayoffPoint {
            price,
            payoff: strategy_payoff(legs, price),
        })
        .collect()
}

pub(crate) fn sample_prices(range: &PriceRange, steps: usize) -> impl Iterator<Item = f64> {
    let steps = steps.max(1);
    let (min, max, width) = (range.min, range.max, range.max - range.min);
    (0..=steps).map(move |i| {
        if i == steps {
            max
        } else {
            min + width * i as f64 / steps as f64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::OptionType;
    use crate::strategy::types::Position;

    #[test]
    fn test_short_leg_payoff_sign() {
        let short_put = OptionLeg::new("sp", OptionType::Put, Position::Short, 100.0, 3.0).with_quantity(2);
        // 2 * (3 - 10)
        assert_eq!(leg_payoff(&short_put, 90.0), -14.0);
        assert_eq!(leg_payoff(&short_put, 110.0), 6.0);
    }

    #[test]
    fn test_net_premium_credit_and_debit() {
        let debit = vec![
            OptionLeg::new("lc", OptionType::Call, Position::Long, 100.0, 4.0),
            OptionLeg::new("sc", OptionType::Call, Position::Short, 110.0, 1.5),
        ];
        assert_eq!(net_premium(&debit), -2.5);

        let credit = vec![OptionLeg::new("sp", OptionType::Put, Position::Short, 100.0, 3.0).with_quantity(2)];
        assert_eq!(net_premium(&credit), 6.0);
        assert_eq!(net_premium(&[]), 0.0);
    }

    #[test]
    fn test_sample_prices_outlive_range() {
        let prices = {
            let range = PriceRange::new(90.0, 110.0);
            sample_prices(&range, 2)
        };
        assert_eq!(prices.collect::<Vec<_>>(), vec![90.0, 100.0, 110.0]);
    }

    #[test]
    fn test_payoff_curve_endpoints() {
        let legs = vec![OptionLeg::new("lc", OptionType::Call, Position::Long, 100.0, 5.0)];
        let curve = payoff_curve(&legs, &PriceRange::new(80.0, 120.0), 4);
        assert_eq!(curve.len(), 5);
        assert_eq!(curve[0], PayoffPoint { price: 80.0, payoff: -5.0 });
        assert_eq!(curve[2].price, 100.0);
        assert_eq!(curve[4], PayoffPoint { price: 120.0, payoff: 15.0 });
    }
}
