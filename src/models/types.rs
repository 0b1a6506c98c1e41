use std::fmt;

/// Option right: call (buy) or put (sell) the underlying at the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Inputs for pricing a single European option under Black-Scholes-Merton.
///
/// `t` is in years; `t = 0` is expiration and is valid. Rates, yield and
/// volatility are decimals (0.20 = 20%).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    pub option_type: OptionType,
    /// Spot price of the underlying (> 0)
    pub s: f64,
    /// Strike price (> 0)
    pub k: f64,
    /// Time to expiry in years (>= 0)
    pub t: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Continuous dividend yield (>= 0)
    pub q: f64,
    /// Volatility (>= 0)
    pub sigma: f64,
}

impl OptionParams {
    pub fn new(option_type: OptionType, s: f64, k: f64, t: f64, r: f64, q: f64, sigma: f64) -> Self {
        Self {
            option_type,
            s,
            k,
            t,
            r,
            q,
            sigma,
        }
    }

    /// Same parameters with a different volatility.
    pub fn with_sigma(self, sigma: f64) -> Self {
        Self { sigma, ..self }
    }
}

/// First and second order price sensitivities.
///
/// Raw units: theta per year of calendar time, vega per unit of volatility,
/// rho per unit of rate. See [`Greeks::to_market_units`] for display units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl Greeks {
    /// Greeks multiplied through by a signed position size.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// Theta per calendar day, vega and rho per one percentage point.
    pub fn to_market_units(&self) -> Self {
        Self {
            delta: self.delta,
            gamma: self.gamma,
            theta: self.theta / super::utils::DAYS_PER_YEAR,
            vega: self.vega / 100.0,
            rho: self.rho / 100.0,
        }
    }
}

impl std::ops::Add for Greeks {
    type Output = Greeks;

    fn add(self, other: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            theta: self.theta + other.theta,
            vega: self.vega + other.vega,
            rho: self.rho + other.rho,
        }
    }
}

impl std::iter::Sum for Greeks {
    fn sum<I: Iterator<Item = Greeks>>(iter: I) -> Greeks {
        iter.fold(Greeks::default(), |acc, g| acc + g)
    }
}

/// Where the spot sits relative to the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Moneyness {
    InTheMoney,
    AtTheMoney,
    OutOfTheMoney,
}
