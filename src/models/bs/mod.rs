// Black-Scholes-Merton pricing of European options with a continuous dividend
// yield. Expiration (T = 0) and zero volatility are handled as explicit
// branches so no division by sigma*sqrt(T) ever happens on those paths.

mod greeks;

pub(crate) use greeks::vega_unchecked;

pub use greeks::{bs_greeks, bs_price_and_greeks};

use statrs::consts::SQRT_2PI;
use statrs::function::erf::erfc;

use crate::error::PricingError;
use crate::models::types::{OptionParams, OptionType};

/// Standard normal cumulative distribution function.
pub(crate) fn norm_cdf(x: f64) -> f64 {
    // erfc keeps precision in the lower tail where 1 + erf(x) would cancel
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal density.
pub(crate) fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

/// Reject inputs outside the pricing domain: S <= 0, K <= 0, T < 0, sigma < 0, or non-finite.
pub(crate) fn validate_params(params: &OptionParams) -> Result<(), PricingError> {
    let checks = [
        ("spot", params.s, params.s > 0.0),
        ("strike", params.k, params.k > 0.0),
        ("time to expiry", params.t, params.t >= 0.0),
        ("volatility", params.sigma, params.sigma >= 0.0),
        ("rate", params.r, true),
        ("dividend yield", params.q, true),
    ];

    for (name, value, in_domain) in checks {
        if !value.is_finite() || !in_domain {
            return Err(PricingError::InvalidParameter { name, value });
        }
    }
    Ok(())
}

/// d1 and d2 for T > 0 and sigma > 0.
#[allow(non_snake_case)]
pub(crate) fn d1_d2(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price of a European call option under Black-Scholes-Merton assumptions.
///
/// At `T = 0` this is the undiscounted intrinsic value; with `sigma = 0` it is
/// the discounted intrinsic value of the deterministic forward.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    if T == 0.0 {
        return (S - K).max(0.0);
    }
    if sigma == 0.0 {
        return (S * (-q * T).exp() - K * (-r * T).exp()).max(0.0);
    }
    let (d1, d2) = d1_d2(S, K, r, q, T, sigma);
    S * (-q * T).exp() * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes-Merton assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    if T == 0.0 {
        return (K - S).max(0.0);
    }
    if sigma == 0.0 {
        return (K * (-r * T).exp() - S * (-q * T).exp()).max(0.0);
    }
    let (d1, d2) = d1_d2(S, K, r, q, T, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * (-q * T).exp() * norm_cdf(-d1)
}

/// Black-Scholes-Merton price of a European option.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] when S <= 0, K <= 0, T < 0, sigma < 0
/// or any input is not finite.
///
/// # Example
///
/// ```rust
/// use options_lib::{bs_price, OptionParams, OptionType};
///
/// let params = OptionParams::new(OptionType::Call, 105.0, 100.0, 0.0, 0.05, 0.0, 0.2);
/// assert_eq!(bs_price(&params).unwrap(), 5.0);
/// ```
pub fn bs_price(params: &OptionParams) -> Result<f64, PricingError> {
    validate_params(params)?;
    Ok(price_unchecked(params))
}

/// Price without the domain check; callers must have validated `params`.
pub(crate) fn price_unchecked(params: &OptionParams) -> f64 {
    let OptionParams {
        s, k, t, r, q, sigma, ..
    } = *params;
    match params.option_type {
        OptionType::Call => bs_call_price(s, k, r, q, t, sigma),
        OptionType::Put => bs_put_price(s, k, r, q, t, sigma),
    }
}
