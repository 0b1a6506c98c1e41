//! # Options-Lib: European Option Pricing and Multi-Leg Strategy Analysis
//!
//! `options-lib` is a pure, stateless options-analytics engine. It prices European options
//! under Black-Scholes-Merton with a continuous dividend yield, recovers implied volatility
//! from observed prices, and analyses multi-leg strategies at and before expiry.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: closed-form prices and analytic Greeks, with explicit expiration
//!   and zero-volatility branches
//! - **Implied Volatility**: Newton-Raphson with a bisection fallback; failures are reported
//!   in the result, never raised
//! - **Strategy Engine**: payoff at expiry, break-evens, bounded/unbounded profit and loss,
//!   net premium, validation and named presets
//! - **Position Valuation**: mark-to-model P/L and aggregate Greeks before expiry
//!
//! ## Quick Start
//!
//! ```rust
//! use options_lib::{
//!     analyze_strategy, bs_price, implied_vol, preset, IvParams, OptionParams, OptionType,
//!     PriceRange,
//! };
//!
//! // Price a six-month call
//! let params = OptionParams::new(OptionType::Call, 100.0, 105.0, 0.5, 0.03, 0.0, 0.25);
//! let price = bs_price(&params)?;
//!
//! // Recover the volatility from that price
//! let iv = implied_vol(&IvParams {
//!     option_type: OptionType::Call,
//!     s: 100.0,
//!     k: 105.0,
//!     t: 0.5,
//!     r: 0.03,
//!     q: 0.0,
//!     market_price: price,
//! });
//! assert!((iv.implied_vol.unwrap() - 0.25).abs() < 1e-6);
//!
//! // Analyse a preset strategy at expiry
//! let condor = preset("iron-condor").unwrap();
//! let analysis = analyze_strategy(condor, &PriceRange::new(50.0, 150.0));
//! assert_eq!(analysis.break_evens.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Conventions
//!
//! Monetary values share the caller's currency unit. Volatility and rates are decimals
//! (0.20 = 20%). Pricing time is in years; leg expiry is in calendar days (ACT/365).
//!
//! ## Solver Presets
//!
//! - `standard()`: default tolerances for general use
//! - `precise()`: tight tolerances for research and validation
//! - `fast()`: loose tolerances for interactive recalculation

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod strategy;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Errors and configuration
pub use config::{IvSolverConfig, MarketScenario};
pub use error::{IvFailure, PricingError};

// Pricing engine
pub use models::bs::{bs_call_price, bs_greeks, bs_price, bs_price_and_greeks, bs_put_price};
pub use models::types::{Greeks, Moneyness, OptionParams, OptionType};
pub use models::utils::{classify_moneyness, days_to_years, intrinsic_value, DAYS_PER_YEAR};

// Implied volatility
pub use models::implied_vol::{
    implied_vol, implied_vol_with_config, solve_implied_vol, IvMethod, IvOutcome, IvParams,
    IvResult,
};

// Strategy engine
pub use strategy::{
    analyze_strategy, find_break_evens, instantiate_preset, leg_payoff, max_profit_loss,
    net_call_exposure, net_premium, payoff_curve, pnl_curve, preset, strategy_payoff,
    strategy_presets, validate_strategy, value_position, LegValuation, OptionLeg, PayoffPoint,
    PnlPoint, Position, PositionAnalysis, PriceRange, ProfitLoss, Strategy, StrategyAnalysis,
    ValidationError, MAX_LEGS,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured implied-volatility solver settings.
///
/// # Available Configurations
///
/// - [`standard()`]: balanced defaults
/// - [`precise()`]: research-grade tolerances
/// - [`fast()`]: interactive use
pub mod default_configs {
    use crate::config::IvSolverConfig;

    /// Balanced configuration used by [`crate::implied_vol`].
    ///
    /// **Characteristics:**
    /// - Newton-Raphson budget: 50 iterations, bisection budget: 200
    /// - Price tolerance: 1e-8
    /// - Bisection bracket: [0.001, 5.0]
    ///
    /// # Example
    ///
    /// ```rust
    /// use options_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.max_newton_iterations, 50);
    /// ```
    pub fn standard() -> IvSolverConfig {
        IvSolverConfig::default()
    }

    /// High-precision configuration for research and model validation.
    ///
    /// **Characteristics:**
    /// - Price tolerance: 1e-12
    /// - Newton-Raphson budget: 100 iterations, bisection budget: 400
    pub fn precise() -> IvSolverConfig {
        IvSolverConfig::precise()
    }

    /// Fast configuration for interactive recalculation.
    ///
    /// **Characteristics:**
    /// - Price tolerance: 1e-6
    /// - Newton-Raphson budget: 20 iterations, bisection budget: 100
    pub fn fast() -> IvSolverConfig {
        IvSolverConfig::fast()
    }
}
