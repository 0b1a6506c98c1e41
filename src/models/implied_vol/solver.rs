use tracing::{debug, trace};

use super::types::{IvMethod, IvOutcome, IvParams, IvResult};
use crate::config::IvSolverConfig;
use crate::error::IvFailure;
use crate::models::bs::{price_unchecked, vega_unchecked};
use crate::models::types::{OptionParams, OptionType};

/// Why Newton-Raphson was abandoned in favour of bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NewtonAbort {
    FlatVega,
    NegativeVol,
    NonFinite,
    BudgetExhausted,
}

/// Recover the volatility that reprices `params.market_price`, using the
/// default solver configuration.
///
/// # Example
///
/// ```rust
/// use options_lib::{bs_price, implied_vol, IvParams, OptionParams, OptionType};
///
/// let option = OptionParams::new(OptionType::Call, 100.0, 105.0, 0.5, 0.03, 0.01, 0.32);
/// let market_price = bs_price(&option).unwrap();
///
/// let result = implied_vol(&IvParams {
///     option_type: OptionType::Call,
///     s: 100.0,
///     k: 105.0,
///     t: 0.5,
///     r: 0.03,
///     q: 0.01,
///     market_price,
/// });
/// assert!((result.implied_vol.unwrap() - 0.32).abs() < 1e-6);
/// assert!(result.error.is_none());
/// ```
pub fn implied_vol(params: &IvParams) -> IvResult {
    implied_vol_with_config(params, &IvSolverConfig::default())
}

/// [`implied_vol`] with a caller-supplied solver configuration.
pub fn implied_vol_with_config(params: &IvParams, config: &IvSolverConfig) -> IvResult {
    solve_implied_vol(params, config).into()
}

/// Run the two-phase root search and return the tagged outcome.
pub fn solve_implied_vol(params: &IvParams, config: &IvSolverConfig) -> IvOutcome {
    if let Err(failure) = check_inputs(params) {
        return IvOutcome::Failed {
            failure,
            iterations: 0,
        };
    }

    let intrinsic = discounted_intrinsic(params);
    if params.market_price < intrinsic - config.intrinsic_tolerance {
        return IvOutcome::Failed {
            failure: IvFailure::BelowIntrinsic {
                market_price: params.market_price,
                intrinsic,
            },
            iterations: 0,
        };
    }

    if params.t == 0.0 {
        return IvOutcome::Failed {
            failure: IvFailure::Expired,
            iterations: 0,
        };
    }

    let outcome = match newton_raphson(params, config) {
        Ok((implied_vol, iterations)) => IvOutcome::Converged {
            implied_vol,
            method: IvMethod::NewtonRaphson,
            iterations,
        },
        Err(reason) => {
            debug!(
                ?reason,
                option_type = %params.option_type,
                strike = params.k,
                market_price = params.market_price,
                "newton-raphson abandoned, falling back to bisection"
            );
            bisection(params, config)
        }
    };
    reject_flat_root(params, config, outcome)
}

/// A root where vega is below `min_vega` is only a point on a flat stretch of
/// the price curve, not the volatility of the quote.
fn reject_flat_root(params: &IvParams, config: &IvSolverConfig, outcome: IvOutcome) -> IvOutcome {
    if let IvOutcome::Converged {
        implied_vol,
        iterations,
        ..
    } = outcome
    {
        let vega = vega_unchecked(&option_at(params, implied_vol));
        if vega < config.min_vega {
            debug!(implied_vol, vega, "price is flat in volatility at the root");
            return IvOutcome::Failed {
                failure: IvFailure::Undetermined { vega },
                iterations,
            };
        }
    }
    outcome
}

fn check_inputs(params: &IvParams) -> Result<(), IvFailure> {
    let checks = [
        ("spot", params.s, params.s > 0.0),
        ("strike", params.k, params.k > 0.0),
        ("time to expiry", params.t, params.t >= 0.0),
        ("market price", params.market_price, params.market_price >= 0.0),
        ("rate", params.r, true),
        ("dividend yield", params.q, true),
    ];

    for (name, value, in_domain) in checks {
        if !value.is_finite() || !in_domain {
            return Err(IvFailure::InvalidInput(name));
        }
    }
    Ok(())
}

/// No-arbitrage floor: intrinsic value of the discounted forward.
fn discounted_intrinsic(params: &IvParams) -> f64 {
    let fwd_leg = params.s * (-params.q * params.t).exp();
    let strike_leg = params.k * (-params.r * params.t).exp();
    match params.option_type {
        OptionType::Call => (fwd_leg - strike_leg).max(0.0),
        OptionType::Put => (strike_leg - fwd_leg).max(0.0),
    }
}

fn option_at(params: &IvParams, sigma: f64) -> OptionParams {
    OptionParams::new(
        params.option_type,
        params.s,
        params.k,
        params.t,
        params.r,
        params.q,
        sigma,
    )
}

fn newton_raphson(params: &IvParams, config: &IvSolverConfig) -> Result<(f64, usize), NewtonAbort> {
    let mut sigma = config.initial_guess;

    for iteration in 1..=config.max_newton_iterations {
        let option = option_at(params, sigma);
        let diff = price_unchecked(&option) - params.market_price;
        let vega = vega_unchecked(&option);
        if vega < config.min_vega {
            return Err(NewtonAbort::FlatVega);
        }

        let step = diff / vega;
        trace!(iteration, sigma, diff, step, "newton-raphson step");

        let next = sigma - step;
        if !next.is_finite() {
            return Err(NewtonAbort::NonFinite);
        }
        if next <= 0.0 {
            return Err(NewtonAbort::NegativeVol);
        }
        // Both the price and sigma must have settled
        if diff.abs() < config.price_tolerance && step.abs() < config.newton_step_tolerance {
            return Ok((next, iteration));
        }
        sigma = next;
    }

    Err(NewtonAbort::BudgetExhausted)
}

fn bisection(params: &IvParams, config: &IvSolverConfig) -> IvOutcome {
    let residual = |sigma: f64| price_unchecked(&option_at(params, sigma)) - params.market_price;
    let converged = |implied_vol: f64, iterations: usize| IvOutcome::Converged {
        implied_vol,
        method: IvMethod::Bisection,
        iterations,
    };

    let (mut lo, mut hi) = (config.vol_lower, config.vol_upper);
    let mut f_lo = residual(lo);
    let f_hi = residual(hi);

    if f_lo == 0.0 {
        return converged(lo, 0);
    }
    if f_hi == 0.0 {
        return converged(hi, 0);
    }
    if f_lo.signum() == f_hi.signum() {
        debug!(f_lo, f_hi, "no sign change across the volatility bracket");
        return IvOutcome::Failed {
            failure: IvFailure::NoConvergence,
            iterations: 0,
        };
    }

    for iteration in 1..=config.max_bisection_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = residual(mid);
        trace!(iteration, lo, hi, f_mid, "bisection step");

        if f_mid == 0.0 || 0.5 * (hi - lo) < config.vol_tolerance {
            return converged(mid, iteration);
        }

        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    IvOutcome::Failed {
        failure: IvFailure::NoConvergence,
        iterations: config.max_bisection_iterations,
    }
}
