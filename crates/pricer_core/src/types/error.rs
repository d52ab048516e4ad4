//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Errors from constructing contract and market inputs
//!
//! Validation happens once, at the construction boundary. Every value that
//! reaches a pricing model has already passed these checks, so pricing itself
//! is infallible.

use thiserror::Error;

/// Input validation errors.
///
/// Each variant carries the rejected value so that callers can report it
/// without re-reading their inputs.
///
/// # Variants
/// - `InvalidStrike`: Strike is non-positive or non-finite
/// - `InvalidExpiration`: Time to expiration is negative or non-finite
/// - `InvalidSpot`: Spot is non-positive or non-finite
/// - `InvalidVolatility`: Volatility is negative or non-finite
/// - `InvalidRate`: Risk-free rate is non-finite
///
/// # Examples
/// ```
/// use pricer_core::types::ValidationError;
///
/// let err = ValidationError::InvalidStrike { strike: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid strike: K = -100 (must be positive)");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// Strike price is non-positive or non-finite.
    #[error("Invalid strike: K = {strike} (must be positive)")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Time to expiration is negative or non-finite.
    #[error("Invalid time to expiration: T = {time_to_expiration} (must be non-negative)")]
    InvalidExpiration {
        /// The rejected time to expiration, in years
        time_to_expiration: f64,
    },

    /// Spot price is non-positive or non-finite.
    #[error("Invalid spot price: S = {spot} (must be positive)")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Volatility is negative or non-finite.
    #[error("Invalid volatility: σ = {volatility} (must be non-negative)")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Risk-free rate is non-finite. Negative rates are valid.
    #[error("Invalid risk-free rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },
}

impl ValidationError {
    /// Returns the name of the offending input field.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::ValidationError;
    ///
    /// let err = ValidationError::InvalidVolatility { volatility: -0.2 };
    /// assert_eq!(err.field(), "volatility");
    /// ```
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidStrike { .. } => "strike",
            ValidationError::InvalidExpiration { .. } => "time_to_expiration",
            ValidationError::InvalidSpot { .. } => "spot",
            ValidationError::InvalidVolatility { .. } => "volatility",
            ValidationError::InvalidRate { .. } => "rate",
        }
    }

    /// Returns the rejected value.
    pub fn value(&self) -> f64 {
        match *self {
            ValidationError::InvalidStrike { strike } => strike,
            ValidationError::InvalidExpiration { time_to_expiration } => time_to_expiration,
            ValidationError::InvalidSpot { spot } => spot,
            ValidationError::InvalidVolatility { volatility } => volatility,
            ValidationError::InvalidRate { rate } => rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strike_display() {
        let err = ValidationError::InvalidStrike { strike: -100.0 };
        assert_eq!(
            format!("{}", err),
            "Invalid strike: K = -100 (must be positive)"
        );
    }

    #[test]
    fn test_invalid_expiration_display() {
        let err = ValidationError::InvalidExpiration {
            time_to_expiration: -1.0,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid time to expiration: T = -1 (must be non-negative)"
        );
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = ValidationError::InvalidSpot { spot: -100.0 };
        assert_eq!(
            format!("{}", err),
            "Invalid spot price: S = -100 (must be positive)"
        );
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = ValidationError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(
            format!("{}", err),
            "Invalid volatility: σ = -0.2 (must be non-negative)"
        );
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = ValidationError::InvalidRate { rate: f64::NAN };
        assert!(format!("{}", err).contains("NaN"));
    }

    #[test]
    fn test_field_and_value() {
        let cases = [
            (ValidationError::InvalidStrike { strike: -1.0 }, "strike"),
            (
                ValidationError::InvalidExpiration {
                    time_to_expiration: -1.0,
                },
                "time_to_expiration",
            ),
            (ValidationError::InvalidSpot { spot: -1.0 }, "spot"),
            (
                ValidationError::InvalidVolatility { volatility: -1.0 },
                "volatility",
            ),
            (ValidationError::InvalidRate { rate: -1.0 }, "rate"),
        ];
        for (err, field) in cases {
            assert_eq!(err.field(), field);
            assert_eq!(err.value(), -1.0);
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ValidationError::InvalidSpot { spot: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let err = ValidationError::InvalidVolatility { volatility: -0.2 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidVolatility"));
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
