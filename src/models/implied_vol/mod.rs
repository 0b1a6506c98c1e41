//! Implied volatility solver
//!
//! Inverts the Black-Scholes-Merton price for volatility. Newton-Raphson is
//! tried first; on a vanishing vega, a negative step or an exhausted budget the
//! search falls back to bisection over a fixed bracket. A root where vega has
//! vanished is reported as undetermined rather than returned. Every failure is
//! reported through [`IvResult`], the solver never returns an error or panics.

pub mod solver;
pub mod types;

pub use solver::*;
pub use types::*;
