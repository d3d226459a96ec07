//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading and
//! validating meter settings from a YAML file.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::Weekday;
use rust_decimal::Decimal;

use crate::calculation::CalendarContext;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayRateModel, RateAmount};

use super::types::MeterConfig;

/// Loads and validates meter settings.
///
/// The `SettingsLoader` reads a YAML settings file and produces the
/// validated [`PayRateModel`] and [`CalendarContext`] the engine consumes.
/// Validation lives here, at the boundary: a rate amount must be positive
/// and times must parse, so the engine itself only ever sees well-formed
/// settings.
///
/// # File Structure
///
/// ```text
/// rate:
///   amount: 800
///   type: daily            # daily | hourly | annual
/// schedule:
///   start_time: "09:00"
///   end_time: "17:00"      # earlier than start_time means overnight
///   runs_on_weekends: false
/// calendar:                # optional
///   weekend_days: [saturday, sunday]
/// ```
///
/// # Example
///
/// ```no_run
/// use earnings_meter::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/meter.yaml").unwrap();
/// println!("Daily rate: {}", loader.settings().daily_rate());
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: PayRateModel,
    calendar: CalendarContext,
}

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/meter.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `SettingsLoader` on success, or an error if:
    /// - The file is missing or contains invalid YAML
    /// - The rate amount is zero or negative
    /// - A time of day is malformed or out of range
    /// - A weekend day name is not recognised
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml(path)?;
        Self::from_config(config)
    }

    /// Builds a loader from an already-parsed configuration.
    pub fn from_config(config: MeterConfig) -> EngineResult<Self> {
        if config.rate.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidRateAmount {
                amount: config.rate.amount,
            });
        }

        let settings = PayRateModel {
            rate: RateAmount::new(config.rate.amount, config.rate.rate_type),
            start_time: config.schedule.start_time.parse()?,
            end_time: config.schedule.end_time.parse()?,
            runs_on_weekends: config.schedule.runs_on_weekends,
        };

        let calendar = match config.calendar.weekend_days {
            Some(names) => CalendarContext::new(Self::parse_weekend_days(&names)?),
            None => CalendarContext::default(),
        };

        Ok(Self { settings, calendar })
    }

    /// Loads and parses the YAML settings file.
    fn load_yaml(path: &Path) -> EngineResult<MeterConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Parses weekend day names into chrono weekdays.
    fn parse_weekend_days(names: &[String]) -> EngineResult<Vec<Weekday>> {
        names
            .iter()
            .map(|name| {
                Weekday::from_str(name).map_err(|_| EngineError::UnknownWeekendDay {
                    name: name.clone(),
                })
            })
            .collect()
    }

    /// Returns the validated pay rate settings.
    pub fn settings(&self) -> &PayRateModel {
        &self.settings
    }

    /// Returns the calendar context derived from the settings.
    pub fn calendar(&self) -> &CalendarContext {
        &self.calendar
    }
}
