mod test_utils;

use options_lib::{
    bs_greeks, bs_price, implied_vol, implied_vol_with_config, solve_implied_vol, IvFailure,
    IvMethod, IvOutcome, IvParams, IvSolverConfig, OptionParams, OptionType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_utils::{create_option, iv_params_for};

/// Vega below which a quote is too flat in volatility to pin it down.
const DEGENERATE_VEGA: f64 = 1e-6;

/// A solved volatility must match the one that generated the price. A quote
/// may only go unsolved when its vega is degenerate, and then it carries an error.
fn assert_round_trip(option: &OptionParams) -> bool {
    let price = bs_price(option).unwrap();
    let result = implied_vol(&iv_params_for(option, price));

    assert_ne!(result.implied_vol.is_some(), result.error.is_some());
    match result.implied_vol {
        Some(recovered) => {
            assert!(
                (recovered - option.sigma).abs() < 1e-4,
                "{:?} recovered as {} via {:?}",
                option,
                recovered,
                result.method
            );
            true
        }
        None => {
            let vega = bs_greeks(option).unwrap().vega;
            assert!(
                vega < DEGENERATE_VEGA,
                "{:?} (vega {:e}) failed: {:?}",
                option,
                vega,
                result.error
            );
            false
        }
    }
}

/// Prices generated from a known volatility must reproduce that volatility.
#[test]
fn test_round_trip_recovers_volatility() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut solved = 0;

    for _ in 0..400 {
        let option_type = if rng.gen_bool(0.5) {
            OptionType::Call
        } else {
            OptionType::Put
        };
        let k = rng.gen_range(80.0..120.0);
        let t = rng.gen_range(0.1..2.0);
        let sigma = rng.gen_range(0.05..1.5);

        if assert_round_trip(&create_option(option_type, k, t, sigma)) {
            solved += 1;
        }
    }

    assert!(solved > 300, "too few quotes solved: {}", solved);
}

/// Deep in- and out-of-the-money quotes, short and long dated, with and without dividends.
#[test]
fn test_round_trip_across_strike_and_expiry_grid() {
    for option_type in [OptionType::Call, OptionType::Put] {
        for k in [60.0, 80.0, 100.0, 120.0, 150.0] {
            for t in [0.05, 0.25, 1.0, 3.0] {
                for q in [0.0, 0.03] {
                    for sigma in [0.05, 0.1, 0.2, 0.5, 1.0, 1.5] {
                        let option = OptionParams::new(option_type, 100.0, k, t, 0.05, q, sigma);
                        assert_round_trip(&option);
                    }
                }
            }
        }
    }
}

/// Newton-Raphson handles ordinary quotes without falling back.
#[test]
fn test_newton_converges_for_atm_quote() {
    let option = create_option(OptionType::Call, 100.0, 1.0, 0.2);
    let price = bs_price(&option).unwrap();

    let result = implied_vol(&iv_params_for(&option, price));
    assert_eq!(result.method, Some(IvMethod::NewtonRaphson));
    assert!(result.iterations >= 1 && result.iterations <= 10);
}

/// A price below the discounted intrinsic floor is rejected with an explanation.
#[test]
fn test_below_intrinsic_reports_error() {
    let params = IvParams {
        option_type: OptionType::Call,
        s: 120.0,
        k: 100.0,
        t: 0.5,
        r: 0.05,
        q: 0.0,
        market_price: 10.0,
    };

    let result = implied_vol(&params);
    assert!(result.implied_vol.is_none());
    assert!(result.method.is_none());
    assert!(result.error.unwrap().contains("intrinsic"));
}

/// Invalid inputs are reported, never raised.
#[test]
fn test_invalid_inputs_are_reported() {
    let base = iv_params_for(&create_option(OptionType::Put, 100.0, 1.0, 0.3), 8.0);

    let bad_spot = IvParams { s: 0.0, ..base };
    let bad_price = IvParams {
        market_price: -1.0,
        ..base
    };
    let bad_time = IvParams { t: f64::NAN, ..base };

    for params in [bad_spot, bad_price, bad_time] {
        let result = implied_vol(&params);
        assert!(!result.is_converged());
        assert!(result.error.unwrap().contains("invalid"));
    }
}

/// Expired quotes above intrinsic carry no volatility information.
#[test]
fn test_expired_option_fails() {
    let params = IvParams {
        t: 0.0,
        ..iv_params_for(&create_option(OptionType::Call, 90.0, 1.0, 0.3), 10.0)
    };
    let outcome = solve_implied_vol(&params, &IvSolverConfig::default());
    assert!(matches!(
        outcome,
        IvOutcome::Failed {
            failure: IvFailure::Expired,
            iterations: 0
        }
    ));
}

/// A call quoted above the spot has no solution at any volatility.
#[test]
fn test_price_above_spot_does_not_converge() {
    let option = create_option(OptionType::Call, 100.0, 0.5, 0.3);
    let result = implied_vol(&iv_params_for(&option, 101.0));

    assert!(result.implied_vol.is_none());
    assert!(result.error.unwrap().contains("converge"));
}

/// A starved Newton budget forces the bisection fallback, which still finds the root.
#[test]
fn test_bisection_fallback() {
    let config = IvSolverConfig {
        max_newton_iterations: 1,
        ..IvSolverConfig::default()
    };
    let option = create_option(OptionType::Put, 110.0, 0.75, 0.45);
    let price = bs_price(&option).unwrap();

    let result = implied_vol_with_config(&iv_params_for(&option, price), &config);
    assert_eq!(result.method, Some(IvMethod::Bisection));
    assert!((result.implied_vol.unwrap() - 0.45).abs() < 1e-6);
}
