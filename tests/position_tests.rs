mod test_utils;

use approx::assert_abs_diff_eq;
use options_lib::{
    bs_greeks, pnl_curve, preset, strategy_payoff, value_position, MarketScenario, OptionParams,
    OptionType, PriceRange,
};
use test_utils::{long_call, long_put, short_call};

fn scenario() -> MarketScenario {
    MarketScenario {
        volatility: 0.25,
        risk_free_rate: 0.05,
        dividend_yield: 0.0,
        days_elapsed: 0.0,
    }
}

/// Aggregate Greeks are the quantity-weighted sum of each leg's Greeks.
#[test]
fn test_aggregate_greeks_are_weighted_sum() {
    let legs = vec![
        long_call(100.0, 4.0).with_quantity(2),
        short_call(110.0, 1.5),
    ];
    let analysis = value_position(&legs, 102.0, &scenario()).unwrap();

    let t = 30.0 / 365.0;
    let lower = bs_greeks(&OptionParams::new(OptionType::Call, 102.0, 100.0, t, 0.05, 0.0, 0.25)).unwrap();
    let upper = bs_greeks(&OptionParams::new(OptionType::Call, 102.0, 110.0, t, 0.05, 0.0, 0.25)).unwrap();

    assert_abs_diff_eq!(analysis.greeks.delta, 2.0 * lower.delta - upper.delta, epsilon = 1e-12);
    assert_abs_diff_eq!(analysis.greeks.gamma, 2.0 * lower.gamma - upper.gamma, epsilon = 1e-12);
    assert_abs_diff_eq!(analysis.greeks.vega, 2.0 * lower.vega - upper.vega, epsilon = 1e-12);
    assert_eq!(analysis.legs.len(), 2);
    assert_eq!(analysis.legs[1].position_greeks.delta, -upper.delta);
}

/// A long straddle is close to delta neutral at the money and long gamma and vega.
#[test]
fn test_straddle_risk_profile() {
    let straddle = preset("straddle").unwrap();
    let analysis = value_position(&straddle.legs, 100.0, &scenario()).unwrap();

    assert!(analysis.greeks.delta.abs() < 0.15);
    assert!(analysis.greeks.gamma > 0.0);
    assert!(analysis.greeks.vega > 0.0);
    assert!(analysis.greeks.theta < 0.0);
}

/// Once every leg has expired the current P/L equals the payoff at expiry.
#[test]
fn test_pnl_curve_converges_to_payoff_at_expiry() {
    let legs = vec![long_put(95.0, 1.8), long_call(105.0, 2.0)];
    let expired = MarketScenario {
        days_elapsed: 30.0,
        ..scenario()
    };

    let curve = pnl_curve(&legs, &PriceRange::new(80.0, 120.0), 8, &expired).unwrap();
    assert_eq!(curve.len(), 9);
    for point in &curve {
        assert_abs_diff_eq!(point.current_pnl, point.expiry_payoff, epsilon = 1e-12);
        assert_abs_diff_eq!(point.expiry_payoff, strategy_payoff(&legs, point.price), epsilon = 1e-12);
    }
}

/// Before expiry a long option is worth at least its payoff at expiry.
#[test]
fn test_time_value_before_expiry() {
    let legs = vec![long_call(100.0, 4.0)];
    let curve = pnl_curve(&legs, &PriceRange::new(80.0, 120.0), 4, &scenario()).unwrap();
    for point in curve {
        assert!(point.current_pnl >= point.expiry_payoff - 1e-12, "at {}", point.price);
    }
}

#[test]
fn test_negative_volatility_scenario_is_rejected() {
    let bad = MarketScenario {
        volatility: -0.1,
        ..scenario()
    };
    assert!(value_position(&[long_call(100.0, 4.0)], 100.0, &bad).is_err());
}
