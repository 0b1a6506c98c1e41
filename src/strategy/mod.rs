//! Multi-leg strategy engine
//!
//! Payoff at expiry, break-evens, profit/loss bounds, net premium and
//! validation for strategies of up to six option legs, named presets, and
//! pre-expiry valuation of the same legs with the pricing engine.

pub mod analysis;
pub mod payoff;
pub mod position;
pub mod presets;
pub mod types;
pub mod validation;

pub use analysis::*;
pub use payoff::*;
pub use position::*;
pub use presets::*;
pub use types::*;
pub use validation::*;
