//! Error types for the pricing engine.
//!
//! Pricing treats a bad numeric domain as a hard precondition violation and
//! returns [`PricingError`]. The implied-volatility solver never fails through
//! `Err`; its [`IvFailure`] values are rendered into the result's `error` string.

use thiserror::Error;

/// Errors raised by the closed-form pricing engine.
///
/// # Examples
/// ```
/// use options_lib::PricingError;
///
/// let err = PricingError::InvalidParameter { name: "spot", value: -1.0 };
/// assert_eq!(err.to_string(), "Invalid parameter: spot = -1");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A numeric input lies outside its valid domain (or is not finite).
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Failure reasons reported by the implied-volatility solver.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IvFailure {
    /// Precondition on an input failed before the solver was entered.
    #[error("{0} invalid")]
    InvalidInput(&'static str),

    /// Market price is below the discounted intrinsic value.
    #[error("market price {market_price} is below intrinsic value {intrinsic}")]
    BelowIntrinsic { market_price: f64, intrinsic: f64 },

    /// At expiration the price does not depend on volatility.
    #[error("option has expired, volatility is undetermined at T = 0")]
    Expired,

    /// The price is flat in volatility at the root, so any nearby volatility reprices it.
    #[error("volatility is undetermined by this price (vega {vega:e} at the root)")]
    Undetermined { vega: f64 },

    /// Neither Newton-Raphson nor bisection produced a root.
    #[error("could not converge")]
    NoConvergence,
}
