//! Settings loading for the Earnings Meter Engine.
//!
//! This module loads meter settings from a YAML file and turns them into
//! the validated domain types the engine consumes.

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{CalendarSection, MeterConfig, RateSection, ScheduleSection};
