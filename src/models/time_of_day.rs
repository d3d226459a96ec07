//! Time-of-day value type.
//!
//! This module defines the TimeOfDay struct representing a wall-clock
//! (hour, minute) pair with no attached date.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A wall-clock time of day with minute precision.
///
/// Equality is by (hour, minute) only. Serialized as an `"HH:MM"` string.
///
/// # Example
///
/// ```
/// use earnings_meter::models::TimeOfDay;
///
/// let nine = TimeOfDay::new(9, 0).unwrap();
/// assert_eq!(nine.seconds_since_midnight(), 32_400);
/// assert_eq!(nine.to_string(), "09:00");
/// assert_eq!("09:00".parse::<TimeOfDay>().unwrap(), nine);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Creates a new time of day.
    ///
    /// # Arguments
    ///
    /// * `hour` - The hour, 0 through 23
    /// * `minute` - The minute, 0 through 59
    ///
    /// # Returns
    ///
    /// Returns the time of day, or `InvalidTimeOfDay` if either component
    /// is out of range.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(EngineError::InvalidTimeOfDay {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the number of seconds between local midnight and this time.
    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidTimeOfDay {
            value: s.to_string(),
        };

        let (hour_str, minute_str) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(TimeOfDay::new(0, 0).unwrap().seconds_since_midnight(), 0);
        assert_eq!(
            TimeOfDay::new(9, 0).unwrap().seconds_since_midnight(),
            32_400
        );
        assert_eq!(
            TimeOfDay::new(17, 30).unwrap().seconds_since_midnight(),
            63_000
        );
        assert_eq!(
            TimeOfDay::new(23, 59).unwrap().seconds_since_midnight(),
            86_340
        );
    }

    #[test]
    fn test_rejects_out_of_range_hour() {
        assert!(TimeOfDay::new(24, 0).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_minute() {
        assert!(TimeOfDay::new(12, 60).is_err());
    }

    #[test]
    fn test_parses_from_string() {
        let time: TimeOfDay = "22:15".parse().unwrap();
        assert_eq!(time.hour(), 22);
        assert_eq!(time.minute(), 15);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("9".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("12:75".parse::<TimeOfDay>().is_err());
        assert!("twelve:00".parse::<TimeOfDay>().is_err());
        assert!("-1:30".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(TimeOfDay::new(6, 5).unwrap().to_string(), "06:05");
    }

    #[test]
    fn test_equality_is_by_components() {
        assert_eq!(TimeOfDay::new(9, 0).unwrap(), "09:00".parse().unwrap());
        assert_ne!(
            TimeOfDay::new(9, 0).unwrap(),
            TimeOfDay::new(9, 1).unwrap()
        );
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let time = TimeOfDay::new(17, 0).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"17:00\"");
        let deserialized: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(time, deserialized);
    }

    #[test]
    fn test_serde_rejects_invalid_string() {
        assert!(serde_json::from_str::<TimeOfDay>("\"99:99\"").is_err());
    }
}
