pub mod bs;
pub mod implied_vol;
pub mod types;

pub use types::{Greeks, Moneyness, OptionParams, OptionType};

/// Utility functions shared by the pricing and strategy engines
pub mod utils {
    use super::types::{Moneyness, OptionType};

    /// Day-count used to convert leg expiries (days) into years.
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Relative distance from the strike inside which an option counts as at the money.
    pub const ATM_BAND: f64 = 0.005;

    /// Payoff if exercised immediately: max(S-K, 0) for calls, max(K-S, 0) for puts.
    pub fn intrinsic_value(option_type: OptionType, spot: f64, strike: f64) -> f64 {
        match option_type {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Convert a day count into a year fraction (ACT/365).
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }

    /// Classify an option as ITM/ATM/OTM using a relative band around the strike.
    pub fn classify_moneyness(option_type: OptionType, spot: f64, strike: f64) -> Moneyness {
        if ((spot - strike) / strike).abs() <= ATM_BAND {
            return Moneyness::AtTheMoney;
        }
        if intrinsic_value(option_type, spot, strike) > 0.0 {
            Moneyness::InTheMoney
        } else {
            Moneyness::OutOfTheMoney
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_intrinsic_value() {
            assert_eq!(intrinsic_value(OptionType::Call, 105.0, 100.0), 5.0);
            assert_eq!(intrinsic_value(OptionType::Call, 95.0, 100.0), 0.0);
            assert_eq!(intrinsic_value(OptionType::Put, 95.0, 100.0), 5.0);
            assert_eq!(intrinsic_value(OptionType::Put, 105.0, 100.0), 0.0);
        }

        #[test]
        fn test_moneyness_classification() {
            assert_eq!(
                classify_moneyness(OptionType::Call, 110.0, 100.0),
                Moneyness::InTheMoney
            );
            assert_eq!(
                classify_moneyness(OptionType::Put, 110.0, 100.0),
                Moneyness::OutOfTheMoney
            );
            assert_eq!(
                classify_moneyness(OptionType::Put, 100.2, 100.0),
                Moneyness::AtTheMoney
            );
        }

        #[test]
        fn test_days_to_years() {
            assert!((days_to_years(365.0) - 1.0).abs() < 1e-15);
            assert!((days_to_years(30.0) - 30.0 / 365.0).abs() < 1e-15);
        }
    }
}
