use std::fmt;

use crate::error::IvFailure;
use crate::models::types::OptionType;

/// Inputs for recovering volatility from an observed option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvParams {
    pub option_type: OptionType,
    /// Spot price (> 0)
    pub s: f64,
    /// Strike price (> 0)
    pub k: f64,
    /// Time to expiry in years (>= 0)
    pub t: f64,
    /// Risk-free rate
    pub r: f64,
    /// Continuous dividend yield
    pub q: f64,
    /// Observed option price (>= 0)
    pub market_price: f64,
}

/// Root-finding method that produced an accepted volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IvMethod {
    #[cfg_attr(feature = "serde", serde(rename = "newton-raphson"))]
    NewtonRaphson,
    #[cfg_attr(feature = "serde", serde(rename = "bisection"))]
    Bisection,
}

impl fmt::Display for IvMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IvMethod::NewtonRaphson => write!(f, "newton-raphson"),
            IvMethod::Bisection => write!(f, "bisection"),
        }
    }
}

/// Outcome of the two-phase root search.
#[derive(Debug, Clone, PartialEq)]
pub enum IvOutcome {
    Converged {
        implied_vol: f64,
        method: IvMethod,
        iterations: usize,
    },
    Failed {
        failure: IvFailure,
        iterations: usize,
    },
}

/// Flat result handed to callers.
///
/// Exactly one of `implied_vol` and `error` is `Some`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvResult {
    pub implied_vol: Option<f64>,
    pub method: Option<IvMethod>,
    /// Iterations spent by the method that produced the result
    pub iterations: usize,
    pub error: Option<String>,
}

impl IvResult {
    pub fn is_converged(&self) -> bool {
        self.implied_vol.is_some()
    }
}

impl From<IvOutcome> for IvResult {
    fn from(outcome: IvOutcome) -> Self {
        match outcome {
            IvOutcome::Converged {
                implied_vol,
                method,
                iterations,
            } => IvResult {
                implied_vol: Some(implied_vol),
                method: Some(method),
                iterations,
                error: None,
            },
            IvOutcome::Failed {
                failure,
                iterations,
            } => IvResult {
                implied_vol: None,
                method: None,
                iterations,
                error: Some(failure.to_string()),
            },
        }
    }
}
