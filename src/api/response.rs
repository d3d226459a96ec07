//! Response types for the Earnings Meter Engine API.
//!
//! This module defines the reading response body and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Reading, ReadingStatus};

/// Response body for a successful reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingResponse {
    /// Correlation ID for this reading.
    pub reading_id: Uuid,
    /// Server-side timestamp of when the reading was produced.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the reading.
    pub engine_version: String,
    /// The amount earned at the requested instant.
    pub amount_earned: Decimal,
    /// Fraction of the shift completed, in `[0, 1]`.
    pub progress: Decimal,
    /// The employment state at the requested instant.
    pub status: ReadingStatus,
    /// Time taken to compute the reading, in microseconds.
    pub duration_us: u64,
}

impl ReadingResponse {
    /// Builds a response from an engine reading.
    pub fn from_reading(reading_id: Uuid, reading: Reading, duration_us: u64) -> Self {
        Self {
            reading_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            amount_earned: reading.amount_earned,
            progress: reading.progress(),
            status: reading.status,
            duration_us,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTimeOfDay { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_OF_DAY",
                    format!("Invalid time of day: {}", value),
                    "Times must be HH:MM with hour 0-23 and minute 0-59",
                ),
            },
            EngineError::InvalidRateAmount { amount } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATE_AMOUNT",
                    format!("Rate amount must be positive: {}", amount),
                    "A zero or negative rate amount means the meter is not configured",
                ),
            },
            EngineError::UnknownWeekendDay { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_WEEKEND_DAY",
                    format!("Unknown weekend day name: {}", name),
                    "Weekend days must be English day names such as 'saturday'",
                ),
            },
        }
    }
}
