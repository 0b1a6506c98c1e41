//! Tunable inputs for the numerical parts of the library.
//!
//! [`IvSolverConfig`] controls the Newton-Raphson/bisection root search and can
//! be loaded from TOML with per-field defaults. [`MarketScenario`] carries the
//! shared volatility/rate/yield assumptions used to value strategy legs before
//! expiry.

/// Implied-volatility solver configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IvSolverConfig {
    /// Starting volatility for Newton-Raphson
    #[cfg_attr(feature = "serde", serde(default = "default_initial_guess"))]
    pub initial_guess: f64,

    /// Stop when |model price - market price| falls below this
    #[cfg_attr(feature = "serde", serde(default = "default_price_tolerance"))]
    pub price_tolerance: f64,

    /// Newton-Raphson accepts a root only once its last step |Δσ| is below this
    #[cfg_attr(feature = "serde", serde(default = "default_newton_step_tolerance"))]
    pub newton_step_tolerance: f64,

    /// Newton-Raphson iteration budget before falling back to bisection
    #[cfg_attr(feature = "serde", serde(default = "default_max_newton_iterations"))]
    pub max_newton_iterations: usize,

    /// Vega below which the price carries no usable volatility information.
    /// Newton-Raphson stops on it, and a root found where vega is smaller is rejected.
    #[cfg_attr(feature = "serde", serde(default = "default_min_vega"))]
    pub min_vega: f64,

    /// Lower end of the bisection bracket
    #[cfg_attr(feature = "serde", serde(default = "default_vol_lower"))]
    pub vol_lower: f64,

    /// Upper end of the bisection bracket
    #[cfg_attr(feature = "serde", serde(default = "default_vol_upper"))]
    pub vol_upper: f64,

    /// Bisection iteration budget
    #[cfg_attr(feature = "serde", serde(default = "default_max_bisection_iterations"))]
    pub max_bisection_iterations: usize,

    /// Stop bisection once the bracket is narrower than this
    #[cfg_attr(feature = "serde", serde(default = "default_vol_tolerance"))]
    pub vol_tolerance: f64,

    /// Slack allowed when comparing the market price against intrinsic value
    #[cfg_attr(feature = "serde", serde(default = "default_intrinsic_tolerance"))]
    pub intrinsic_tolerance: f64,
}

impl Default for IvSolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: default_initial_guess(),
            price_tolerance: default_price_tolerance(),
            newton_step_tolerance: default_newton_step_tolerance(),
            max_newton_iterations: default_max_newton_iterations(),
            min_vega: default_min_vega(),
            vol_lower: default_vol_lower(),
            vol_upper: default_vol_upper(),
            max_bisection_iterations: default_max_bisection_iterations(),
            vol_tolerance: default_vol_tolerance(),
            intrinsic_tolerance: default_intrinsic_tolerance(),
        }
    }
}

impl IvSolverConfig {
    /// Tight tolerances for research and model validation
    pub fn precise() -> Self {
        Self {
            price_tolerance: 1e-12,
            newton_step_tolerance: 1e-12,
            max_newton_iterations: 100,
            max_bisection_iterations: 400,
            vol_tolerance: 1e-14,
            ..Self::default()
        }
    }

    /// Loose tolerances for interactive recalculation
    pub fn fast() -> Self {
        Self {
            price_tolerance: 1e-6,
            newton_step_tolerance: 1e-6,
            max_newton_iterations: 20,
            max_bisection_iterations: 100,
            vol_tolerance: 1e-7,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML; omitted fields take their defaults.
    ///
    /// ```rust
    /// use options_lib::IvSolverConfig;
    ///
    /// let config = IvSolverConfig::from_toml_str("max_newton_iterations = 10").unwrap();
    /// assert_eq!(config.max_newton_iterations, 10);
    /// assert_eq!(config.vol_upper, 5.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the bracket and budgets describe a usable search.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.vol_lower > 0.0 && self.vol_lower < self.vol_upper) {
            anyhow::bail!(
                "invalid volatility bracket [{}, {}]",
                self.vol_lower,
                self.vol_upper
            );
        }
        if self.price_tolerance <= 0.0
            || self.newton_step_tolerance <= 0.0
            || self.vol_tolerance <= 0.0
        {
            anyhow::bail!("tolerances must be positive");
        }
        if self.max_bisection_iterations == 0 {
            anyhow::bail!("bisection needs at least one iteration");
        }
        Ok(())
    }
}

fn default_initial_guess() -> f64 {
    0.3
}

fn default_price_tolerance() -> f64 {
    1e-8
}

fn default_newton_step_tolerance() -> f64 {
    1e-8
}

fn default_max_newton_iterations() -> usize {
    50
}

fn default_min_vega() -> f64 {
    1e-8
}

fn default_vol_lower() -> f64 {
    0.001
}

fn default_vol_upper() -> f64 {
    5.0
}

fn default_max_bisection_iterations() -> usize {
    200
}

fn default_vol_tolerance() -> f64 {
    1e-10
}

fn default_intrinsic_tolerance() -> f64 {
    1e-9
}

/// Shared market assumptions for valuing strategy legs before expiry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketScenario {
    /// Volatility applied to every leg (decimal)
    pub volatility: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
    /// Days rolled forward from today; each leg's remaining life shrinks by this
    #[cfg_attr(feature = "serde", serde(default))]
    pub days_elapsed: f64,
}

impl Default for MarketScenario {
    fn default() -> Self {
        Self {
            volatility: 0.25,
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            days_elapsed: 0.0,
        }
    }
}
