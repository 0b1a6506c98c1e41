use std::fmt;

use super::types::Strategy;

/// Most legs a strategy may carry.
pub const MAX_LEGS: usize = 6;

/// One violated rule. `leg_id` is set for per-leg problems.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    pub leg_id: Option<String>,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn strategy(field: &str, message: impl Into<String>) -> Self {
        Self {
            leg_id: None,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn leg(leg_id: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            leg_id: Some(leg_id.to_string()),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.leg_id {
            Some(id) => write!(f, "leg {}: {}", id, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Check every rule and return all violations; an empty list means the strategy is valid.
///
/// # Example
///
/// ```rust
/// use options_lib::{validate_strategy, OptionLeg, OptionType, Position, Strategy};
///
/// let strategy = Strategy::new(
///     "Long Call",
///     vec![OptionLeg::new("leg-1", OptionType::Call, Position::Long, 0.0, 5.0)],
///     100.0,
/// );
/// let errors = validate_strategy(&strategy);
/// assert_eq!(errors.len(), 1);
/// assert!(errors[0].message.contains("Strike"));
/// ```
pub fn validate_strategy(strategy: &Strategy) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if strategy.legs.is_empty() {
        errors.push(ValidationError::strategy(
            "legs",
            "Strategy must have at least one leg",
        ));
    }
    if strategy.legs.len() > MAX_LEGS {
        errors.push(ValidationError::strategy(
            "legs",
            format!(
                "Strategy cannot have more than {} legs (got {})",
                MAX_LEGS,
                strategy.legs.len()
            ),
        ));
    }
    if !(strategy.underlying_price.is_finite() && strategy.underlying_price > 0.0) {
        errors.push(ValidationError::strategy(
            "underlying_price",
            "Underlying price must be greater than 0",
        ));
    }

    for leg in &strategy.legs {
        if !(leg.strike.is_finite() && leg.strike > 0.0) {
            errors.push(ValidationError::leg(
                &leg.id,
                "strike",
                "Strike price must be greater than 0",
            ));
        }
        if leg.quantity == 0 {
            errors.push(ValidationError::leg(
                &leg.id,
                "quantity",
                "Quantity must be a positive whole number of contracts",
            ));
        }
        if !(leg.premium.is_finite() && leg.premium >= 0.0) {
            errors.push(ValidationError::leg(
                &leg.id,
                "premium",
                "Premium cannot be negative",
            ));
        }
    }

    errors
}
