//! Configuration types for meter settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `meter.yaml` settings file. Time fields stay
//! as raw strings here; validation happens in
//! [`crate::config::SettingsLoader`].

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::RateType;

/// The pay rate section of the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSection {
    /// The configured amount; must be positive to be usable.
    pub amount: Decimal,
    /// The unit the amount is expressed in.
    #[serde(rename = "type")]
    pub rate_type: RateType,
}

/// The work schedule section of the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// Shift start as an `"HH:MM"` string.
    pub start_time: String,
    /// Shift end as an `"HH:MM"` string. Earlier than `start_time` means
    /// an overnight shift.
    pub end_time: String,
    /// Whether weekend days count as working days.
    pub runs_on_weekends: bool,
}

/// The optional calendar section of the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarSection {
    /// Weekend day names (e.g. `saturday`), defaulting to Saturday and
    /// Sunday when omitted.
    #[serde(default)]
    pub weekend_days: Option<Vec<String>>,
}

/// The complete meter settings file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct MeterConfig {
    /// The configured pay rate.
    pub rate: RateSection,
    /// The configured work schedule.
    pub schedule: ScheduleSection,
    /// Calendar overrides.
    #[serde(default)]
    pub calendar: CalendarSection,
}
