//! Error types for the checked geometry API.
//!
//! The plain setters and formulas never fail; they clamp invalid input to
//! zero. The `try_*` variants report the rejected value through
//! [`GeometryError`] instead.

use std::fmt;

use thiserror::Error;

/// Names the input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// A circle's radius.
    Radius,
    /// A circle's circumference.
    Ference,
    /// A circle's area.
    Area,
    /// Radius of the pool in the pool-cost problem.
    PoolRadius,
    /// Width of the walkway surrounding the pool.
    WalkwayWidth,
    /// Price per unit area of walkway.
    WalkwayRate,
    /// Price per unit length of fence.
    FenceRate,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Radius => "radius",
            Self::Ference => "ference",
            Self::Area => "area",
            Self::PoolRadius => "pool radius",
            Self::WalkwayWidth => "walkway width",
            Self::WalkwayRate => "walkway rate",
            Self::FenceRate => "fence rate",
        };
        f.write_str(name)
    }
}

/// Raised by the checked API when an input lies outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The value was below zero.
    #[error("{quantity} must not be negative, got {value}")]
    Negative {
        /// Which input was rejected.
        quantity: Quantity,
        /// The rejected value.
        value: f64,
    },
    /// The value was NaN.
    #[error("{quantity} is not a number")]
    NotANumber {
        /// Which input was rejected.
        quantity: Quantity,
    },
}

impl GeometryError {
    /// The input that triggered the error.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        match self {
            Self::Negative { quantity, .. } | Self::NotANumber { quantity } => *quantity,
        }
    }
}

/// Accepts `value` when it is a non-negative number.
///
/// Infinity passes; only NaN and values below zero are rejected.
///
/// # Errors
/// Returns [`GeometryError::NotANumber`] for NaN and
/// [`GeometryError::Negative`] for values below zero.
pub fn check_non_negative(quantity: Quantity, value: f64) -> Result<f64, GeometryError> {
    if value.is_nan() {
        return Err(GeometryError::NotANumber { quantity });
    }
    if value < 0.0 {
        return Err(GeometryError::Negative { quantity, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_accepted() {
        assert_eq!(check_non_negative(Quantity::Radius, 0.0), Ok(0.0));
    }

    #[test]
    fn negative_zero_is_accepted() {
        assert!(check_non_negative(Quantity::Area, -0.0).is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        let err = check_non_negative(Quantity::Ference, f64::NAN).unwrap_err();
        assert_eq!(err.quantity(), Quantity::Ference);
        assert_eq!(err.to_string(), "ference is not a number");
    }

    #[test]
    fn negative_message_names_value() {
        let err = check_non_negative(Quantity::WalkwayWidth, -2.5).unwrap_err();
        assert_eq!(err.to_string(), "walkway width must not be negative, got -2.5");
    }
}
