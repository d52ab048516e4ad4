//! CLI error types

use pricer_core::types::ValidationError;
use pricer_models::instruments::ParseOptionKindError;
use pricer_models::models::UnknownModelError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Contract or market inputs violate their invariants
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested pricing model does not exist
    #[error(transparent)]
    UnknownModel(#[from] UnknownModelError),

    /// A command-line argument could not be parsed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is inconsistent
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pricing report could not be serialised
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The table report could not be written
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl From<ParseOptionKindError> for CliError {
    fn from(err: ParseOptionKindError) -> Self {
        CliError::InvalidArgument(err.to_string())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err: CliError = ValidationError::InvalidSpot { spot: -100.0 }.into();
        assert_eq!(err.to_string(), "Invalid spot price: S = -100 (must be positive)");
    }

    #[test]
    fn test_option_kind_error_is_invalid_argument() {
        let err: CliError = ParseOptionKindError("straddle".to_string()).into();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Invalid argument: Invalid option type: straddle (must be 'call' or 'put')"
        );
    }

    #[test]
    fn test_format_error_message() {
        let err: CliError = std::fmt::Error.into();
        assert!(matches!(err, CliError::Format(_)));
        assert!(err.to_string().starts_with("Formatting error: "));
    }

    #[test]
    fn test_unknown_model_message() {
        let err: CliError = UnknownModelError {
            name: "heston".to_string(),
        }
        .into();
        assert!(err.to_string().contains("heston"));
    }
}
