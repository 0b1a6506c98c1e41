#![allow(dead_code)] // Each test binary uses a different subset of helpers

use options_lib::{IvParams, OptionLeg, OptionParams, OptionType, Position, PriceRange};

/// Create an option leg more concisely (single contract, 30 days)
pub fn create_leg(
    option_type: OptionType,
    position: Position,
    strike: f64,
    premium: f64,
) -> OptionLeg {
    let id = format!("{}-{}-{}", position, option_type, strike);
    OptionLeg::new(id, option_type, position, strike, premium)
}

pub fn long_call(strike: f64, premium: f64) -> OptionLeg {
    create_leg(OptionType::Call, Position::Long, strike, premium)
}

pub fn short_call(strike: f64, premium: f64) -> OptionLeg {
    create_leg(OptionType::Call, Position::Short, strike, premium)
}

pub fn long_put(strike: f64, premium: f64) -> OptionLeg {
    create_leg(OptionType::Put, Position::Long, strike, premium)
}

pub fn short_put(strike: f64, premium: f64) -> OptionLeg {
    create_leg(OptionType::Put, Position::Short, strike, premium)
}

/// Scan window used across the strategy tests
pub fn test_range() -> PriceRange {
    PriceRange::new(50.0, 150.0)
}

/// Option parameters with the usual test market (S=100, r=5%, q=0)
pub fn create_option(option_type: OptionType, strike: f64, t: f64, sigma: f64) -> OptionParams {
    OptionParams::new(option_type, 100.0, strike, t, 0.05, 0.0, sigma)
}

/// IV solver inputs quoting a market price for the given option
pub fn iv_params_for(option: &OptionParams, market_price: f64) -> IvParams {
    IvParams {
        option_type: option.option_type,
        s: option.s,
        k: option.k,
        t: option.t,
        r: option.r,
        q: option.q,
        market_price,
    }
}
