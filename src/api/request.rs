//! Request types for the Earnings Meter Engine API.
//!
//! This module defines the JSON request structures for the `/reading`
//! and `/reading/accumulated` endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayRateModel, RateAmount, RateType, TimeOfDay};

/// Pay rate settings in a reading request.
///
/// Times use the `"HH:MM"` string form; an end time earlier than the
/// start time is an overnight shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// The configured amount; must be positive.
    pub rate_amount: Decimal,
    /// The unit the amount is expressed in.
    pub rate_type: RateType,
    /// Shift start time of day.
    pub start_time: TimeOfDay,
    /// Shift end time of day.
    pub end_time: TimeOfDay,
    /// Whether weekend days count as working days.
    pub runs_on_weekends: bool,
}

impl SettingsRequest {
    /// Validates the request and converts it into the domain model.
    ///
    /// The reading calculations trust their settings, so the positive-rate
    /// check happens here at the API boundary.
    pub fn into_model(self) -> EngineResult<PayRateModel> {
        if self.rate_amount <= Decimal::ZERO {
            return Err(EngineError::InvalidRateAmount {
                amount: self.rate_amount,
            });
        }
        Ok(PayRateModel {
            rate: RateAmount::new(self.rate_amount, self.rate_type),
            start_time: self.start_time,
            end_time: self.end_time,
            runs_on_weekends: self.runs_on_weekends,
        })
    }
}

/// Request body for the `/reading` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRequest {
    /// The pay rate settings to read against.
    pub settings: SettingsRequest,
    /// The instant to read the meter at, in the caller's local wall clock.
    pub at: NaiveDateTime,
}

/// Request body for the `/reading/accumulated` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulatedReadingRequest {
    /// The pay rate settings to read against.
    pub settings: SettingsRequest,
    /// The instant to read the meter at.
    pub at: NaiveDateTime,
    /// The start of accumulation; its civil day is the first counted day.
    pub since: NaiveDateTime,
}
