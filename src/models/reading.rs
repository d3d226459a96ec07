//! Meter reading output types.
//!
//! This module defines the Reading struct and ReadingStatus enum, the
//! value types produced by every calculation call. Readings are recreated
//! fresh on each call and never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employment state a reading was taken in.
///
/// # Example
///
/// ```
/// use earnings_meter::models::ReadingStatus;
/// use rust_decimal::Decimal;
///
/// let status = ReadingStatus::AtWork { progress: Decimal::new(5, 1) };
/// let json = serde_json::to_string(&status).unwrap();
/// assert_eq!(json, r#"{"state":"at_work","progress":"0.5"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReadingStatus {
    /// The day is not a working day for this schedule.
    DayOff,
    /// The working day has not started yet.
    BeforeWork,
    /// The shift is in progress.
    AtWork {
        /// Fraction of the shift completed, in `[0, 1]`.
        progress: Decimal,
    },
    /// The shift has finished for the day.
    AfterWork,
}

/// A snapshot of earned amount and completion status at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// The amount earned so far, `>= 0`.
    pub amount_earned: Decimal,
    /// The employment state at the instant of the reading.
    pub status: ReadingStatus,
}

impl Reading {
    /// Creates a reading for a non-working day.
    pub fn day_off() -> Self {
        Self {
            amount_earned: Decimal::ZERO,
            status: ReadingStatus::DayOff,
        }
    }

    /// Creates a reading taken before the working day starts.
    pub fn before_work() -> Self {
        Self {
            amount_earned: Decimal::ZERO,
            status: ReadingStatus::BeforeWork,
        }
    }

    /// Creates an in-progress reading.
    pub fn at_work(amount_earned: Decimal, progress: Decimal) -> Self {
        Self {
            amount_earned,
            status: ReadingStatus::AtWork { progress },
        }
    }

    /// Creates a reading taken after the shift has finished.
    pub fn after_work(amount_earned: Decimal) -> Self {
        Self {
            amount_earned,
            status: ReadingStatus::AfterWork,
        }
    }

    /// Returns the completion fraction for this reading.
    ///
    /// 0 for day-off and before-work readings, 1 after work, and the
    /// carried value while at work.
    pub fn progress(&self) -> Decimal {
        match self.status {
            ReadingStatus::DayOff | ReadingStatus::BeforeWork => Decimal::ZERO,
            ReadingStatus::AtWork { progress } => progress,
            ReadingStatus::AfterWork => Decimal::ONE,
        }
    }
}
