//! Error types for the Earnings Meter Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only arise at the boundaries of the engine (settings loading and
//! request validation); the reading calculations themselves are total and
//! never fail.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Earnings Meter Engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use earnings_meter::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/meter.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/meter.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day value was outside the valid range or malformed.
    #[error("Invalid time of day '{value}': expected HH:MM with hour 0-23 and minute 0-59")]
    InvalidTimeOfDay {
        /// The value that failed to parse.
        value: String,
    },

    /// A rate amount was zero or negative where a positive amount is required.
    #[error("Rate amount must be positive: {amount}")]
    InvalidRateAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// A weekend day name in the configuration was not recognised.
    #[error("Unknown weekend day name: {name}")]
    UnknownWeekendDay {
        /// The unrecognised day name.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/meter.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/meter.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_time_of_day_displays_value() {
        let error = EngineError::InvalidTimeOfDay {
            value: "25:00".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time of day '25:00': expected HH:MM with hour 0-23 and minute 0-59"
        );
    }

    #[test]
    fn test_invalid_rate_amount_displays_amount() {
        let error = EngineError::InvalidRateAmount {
            amount: Decimal::from_str("-5").unwrap(),
        };
        assert_eq!(error.to_string(), "Rate amount must be positive: -5");
    }

    #[test]
    fn test_unknown_weekend_day_displays_name() {
        let error = EngineError::UnknownWeekendDay {
            name: "funday".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown weekend day name: funday");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
