//! Analytic Greeks for the Black-Scholes-Merton model.
//!
//! Theta is the derivative with respect to calendar time (negative when a long
//! option loses value as time passes). At expiration every Greek is zero except
//! delta, which takes the terminal exercise indicator: +1 for an exercised call,
//! -1 for an exercised put, 0 otherwise.

use super::{d1_d2, norm_cdf, norm_pdf, price_unchecked, validate_params};
use crate::error::PricingError;
use crate::models::types::{Greeks, OptionParams, OptionType};

/// Analytic Greeks of a European option.
///
/// At `t = 0` delta is the signed exercise indicator: `1.0` for an exercised
/// call, `-1.0` for an exercised put (not `+1`), `0.0` otherwise. The sign
/// keeps position deltas additive across calls and puts.
///
/// # Errors
///
/// Same domain checks as [`super::bs_price`].
pub fn bs_greeks(params: &OptionParams) -> Result<Greeks, PricingError> {
    validate_params(params)?;
    Ok(greeks_unchecked(params))
}

/// Price and Greeks from a single validation pass.
pub fn bs_price_and_greeks(params: &OptionParams) -> Result<(f64, Greeks), PricingError> {
    validate_params(params)?;
    Ok((price_unchecked(params), greeks_unchecked(params)))
}

pub(crate) fn greeks_unchecked(params: &OptionParams) -> Greeks {
    if params.t == 0.0 {
        return expiry_greeks(params);
    }
    if params.sigma == 0.0 {
        return deterministic_greeks(params);
    }

    let OptionParams {
        option_type,
        s,
        k,
        t,
        r,
        q,
        sigma,
    } = *params;

    let sqrt_t = t.sqrt();
    let (d1, d2) = d1_d2(s, k, r, q, t, sigma);
    let div_disc = (-q * t).exp();
    let rate_disc = (-r * t).exp();
    let pdf_d1 = norm_pdf(d1);

    let gamma = div_disc * pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * div_disc * pdf_d1 * sqrt_t;
    let decay = -s * div_disc * pdf_d1 * sigma / (2.0 * sqrt_t);

    match option_type {
        OptionType::Call => {
            let (nd1, nd2) = (norm_cdf(d1), norm_cdf(d2));
            Greeks {
                delta: div_disc * nd1,
                gamma,
                theta: decay - r * k * rate_disc * nd2 + q * s * div_disc * nd1,
                vega,
                rho: k * t * rate_disc * nd2,
            }
        }
        OptionType::Put => {
            let (nd1, nd2) = (norm_cdf(-d1), norm_cdf(-d2));
            Greeks {
                delta: -div_disc * nd1,
                gamma,
                theta: decay + r * k * rate_disc * nd2 - q * s * div_disc * nd1,
                vega,
                rho: -k * t * rate_disc * nd2,
            }
        }
    }
}

/// Vega alone, for root searches that need only the price slope.
pub(crate) fn vega_unchecked(params: &OptionParams) -> f64 {
    if params.t == 0.0 || params.sigma == 0.0 {
        return 0.0;
    }
    let OptionParams {
        s, k, t, r, q, sigma, ..
    } = *params;
    let (d1, _) = d1_d2(s, k, r, q, t, sigma);
    s * (-q * t).exp() * norm_pdf(d1) * t.sqrt()
}

fn expiry_greeks(params: &OptionParams) -> Greeks {
    let delta = match params.option_type {
        OptionType::Call if params.s > params.k => 1.0,
        OptionType::Put if params.s < params.k => -1.0,
        _ => 0.0,
    };
    Greeks {
        delta,
        ..Greeks::default()
    }
}

// With sigma = 0 the option is worth max(0, +/-(S e^-qT - K e^-rT)), a
// piecewise-linear function of the discounted forward.
fn deterministic_greeks(params: &OptionParams) -> Greeks {
    let OptionParams { s, k, t, r, q, .. } = *params;
    let fwd_leg = s * (-q * t).exp();
    let strike_leg = k * (-r * t).exp();

    let sign = match params.option_type {
        OptionType::Call if fwd_leg > strike_leg => 1.0,
        OptionType::Put if fwd_leg < strike_leg => -1.0,
        _ => return Greeks::default(),
    };

    Greeks {
        delta: sign * (-q * t).exp(),
        gamma: 0.0,
        theta: sign * (q * fwd_leg - r * strike_leg),
        vega: 0.0,
        rho: sign * k * t * (-r * t).exp(),
    }
}
