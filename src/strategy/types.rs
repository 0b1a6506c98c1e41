use std::fmt;

use crate::models::types::OptionType;

/// Direction of a leg: bought (long) or sold (short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    Long,
    Short,
}

impl Position {
    /// +1 for long, -1 for short.
    pub fn sign(self) -> f64 {
        match self {
            Position::Long => 1.0,
            Position::Short => -1.0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Long => write!(f, "long"),
            Position::Short => write!(f, "short"),
        }
    }
}

/// One option position inside a strategy.
///
/// Quantity and premium are per contract. Expiry is in calendar days; callers
/// pricing the leg convert it to years.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionLeg {
    pub id: String,
    pub option_type: OptionType,
    pub position: Position,
    pub quantity: u32,
    pub strike: f64,
    pub premium: f64,
    pub expiry_days: u32,
}

impl OptionLeg {
    /// Single-contract leg expiring in 30 days.
    pub fn new(
        id: impl Into<String>,
        option_type: OptionType,
        position: Position,
        strike: f64,
        premium: f64,
    ) -> Self {
        Self {
            id: id.into(),
            option_type,
            position,
            quantity: 1,
            strike,
            premium,
            expiry_days: 30,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_expiry_days(mut self, expiry_days: u32) -> Self {
        self.expiry_days = expiry_days;
        self
    }

    /// Signed contract count: `quantity * sign(position)`.
    pub fn signed_quantity(&self) -> f64 {
        self.quantity as f64 * self.position.sign()
    }
}

/// A named set of legs on one underlying.
///
/// The 1..=6 leg limit is checked by [`crate::validate_strategy`], not here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    pub name: String,
    pub legs: Vec<OptionLeg>,
    pub underlying_price: f64,
}

impl Strategy {
    pub fn new(name: impl Into<String>, legs: Vec<OptionLeg>, underlying_price: f64) -> Self {
        Self {
            name: name.into(),
            legs,
            underlying_price,
        }
    }
}

/// Scan window of underlying prices used by break-even and max profit/loss search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Half-width of the default scan window, as a fraction of spot.
    pub const DEFAULT_WIDTH: f64 = 0.5;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[spot * (1 - width), spot * (1 + width)]`, floored just above zero.
    pub fn around(spot: f64, width: f64) -> Self {
        Self {
            min: (spot * (1.0 - width)).max(spot * 1e-3),
            max: spot * (1.0 + width),
        }
    }

    /// ±50% around spot.
    pub fn default_for(spot: f64) -> Self {
        Self::around(spot, Self::DEFAULT_WIDTH)
    }

    /// `0 < min < max`, both finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min < self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}
