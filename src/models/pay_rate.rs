//! Pay rate settings model.
//!
//! This module defines the PayRateModel struct describing a configured work
//! schedule, together with the derived quantities (shift duration, daily
//! rate, annual rate) the reading calculations are built on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::{RateAmount, RateType};
use super::time_of_day::TimeOfDay;

/// Number of seconds in a civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

const SECONDS_PER_HOUR: i64 = 3_600;

/// Approximate working days per year when the schedule includes weekends.
const BUSINESS_DAYS_ALL_WEEK: u32 = 365;

/// Approximate working days per year for a weekday-only schedule.
/// Deliberately ignores leap years and public holidays.
const BUSINESS_DAYS_WEEKDAYS_ONLY: u32 = 261;

/// A configured work schedule with its pay rate.
///
/// Immutable once constructed. No ordering is enforced between `start_time`
/// and `end_time`: equal times are a degenerate zero-duration shift, and an
/// end time earlier than the start time is interpreted as an overnight
/// shift that crosses midnight, not as an error.
///
/// # Example
///
/// ```
/// use earnings_meter::models::{PayRateModel, RateAmount, RateType, TimeOfDay};
/// use rust_decimal::Decimal;
///
/// let settings = PayRateModel {
///     rate: RateAmount::new(Decimal::from(50), RateType::Hourly),
///     start_time: TimeOfDay::new(9, 0).unwrap(),
///     end_time: TimeOfDay::new(17, 0).unwrap(),
///     runs_on_weekends: false,
/// };
/// assert!(!settings.is_overnight_shift());
/// assert_eq!(settings.daily_rate(), Decimal::from(400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayRateModel {
    /// The configured pay rate.
    pub rate: RateAmount,
    /// The time of day the shift starts.
    pub start_time: TimeOfDay,
    /// The time of day the shift ends.
    pub end_time: TimeOfDay,
    /// Whether weekend days count as working days.
    pub runs_on_weekends: bool,
}

impl PayRateModel {
    /// Returns whether the shift crosses midnight.
    ///
    /// Any end time strictly earlier than the start time is an overnight
    /// shift. There is no other signal distinguishing "overnight" from a
    /// misconfigured same-day shift.
    pub fn is_overnight_shift(&self) -> bool {
        self.end_time.seconds_since_midnight() < self.start_time.seconds_since_midnight()
    }

    /// Returns the length of one shift in seconds.
    ///
    /// For an overnight shift this is the pre-midnight portion plus the
    /// post-midnight portion.
    pub fn shift_duration_seconds(&self) -> i64 {
        let start = self.start_time.seconds_since_midnight();
        let end = self.end_time.seconds_since_midnight();
        if self.is_overnight_shift() {
            (SECONDS_PER_DAY - start) + end
        } else {
            end - start
        }
    }

    /// Returns the length of one shift in hours.
    pub fn hours_per_day(&self) -> Decimal {
        Decimal::from(self.shift_duration_seconds()) / Decimal::from(SECONDS_PER_HOUR)
    }

    /// Returns the approximate number of working days in a year for this
    /// schedule: 365 when weekends are worked, 261 otherwise.
    pub fn business_days_per_year(&self) -> Decimal {
        if self.runs_on_weekends {
            Decimal::from(BUSINESS_DAYS_ALL_WEEK)
        } else {
            Decimal::from(BUSINESS_DAYS_WEEKDAYS_ONLY)
        }
    }

    /// Returns the amount earned for one full completed shift.
    ///
    /// # Derivation
    ///
    /// - `daily` rates are used directly
    /// - `hourly` rates are multiplied by the shift length in hours
    /// - `annual` rates are divided by [`Self::business_days_per_year`]
    pub fn daily_rate(&self) -> Decimal {
        match self.rate.rate_type {
            RateType::Daily => self.rate.amount,
            RateType::Hourly => self.hours_per_day() * self.rate.amount,
            RateType::Annual => self.rate.amount / self.business_days_per_year(),
        }
    }

    /// Returns the amount earned across a full year of working days.
    ///
    /// The inverse derivation of [`Self::daily_rate`].
    pub fn annual_rate(&self) -> Decimal {
        match self.rate.rate_type {
            RateType::Daily => self.rate.amount * self.business_days_per_year(),
            RateType::Hourly => {
                self.hours_per_day() * self.rate.amount * self.business_days_per_year()
            }
            RateType::Annual => self.rate.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn model(amount: &str, rate_type: RateType, start: &str, end: &str, weekends: bool) -> PayRateModel {
        PayRateModel {
            rate: RateAmount::new(dec(amount), rate_type),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            runs_on_weekends: weekends,
        }
    }

    #[test]
    fn test_same_day_shift_duration() {
        let settings = model("400", RateType::Daily, "09:00", "17:00", false);
        assert!(!settings.is_overnight_shift());
        assert_eq!(settings.shift_duration_seconds(), 8 * 3600);
        assert_eq!(settings.hours_per_day(), dec("8"));
    }

    #[test]
    fn test_overnight_shift_duration() {
        let settings = model("400", RateType::Daily, "22:00", "06:00", false);
        assert!(settings.is_overnight_shift());
        assert_eq!(settings.shift_duration_seconds(), 8 * 3600);
    }

    #[test]
    fn test_zero_duration_shift() {
        let settings = model("400", RateType::Daily, "09:00", "09:00", false);
        assert!(!settings.is_overnight_shift());
        assert_eq!(settings.shift_duration_seconds(), 0);
    }

    #[test]
    fn test_one_minute_overnight_wrap() {
        // 23:59 to 00:00 is a one-minute overnight shift
        let settings = model("400", RateType::Daily, "23:59", "00:00", false);
        assert!(settings.is_overnight_shift());
        assert_eq!(settings.shift_duration_seconds(), 60);
    }

    #[test]
    fn test_business_days_per_year() {
        let weekdays_only = model("1", RateType::Daily, "09:00", "17:00", false);
        assert_eq!(weekdays_only.business_days_per_year(), dec("261"));

        let all_week = model("1", RateType::Daily, "09:00", "17:00", true);
        assert_eq!(all_week.business_days_per_year(), dec("365"));
    }

    // ==========================================================================
    // Rate-type equivalence: for an 8-hour weekday shift, daily 400,
    // hourly 50 and annual 104400 must all derive a daily rate of 400.
    // ==========================================================================
    #[test]
    fn test_daily_rate_from_daily_amount() {
        let settings = model("400", RateType::Daily, "09:00", "17:00", false);
        assert_eq!(settings.daily_rate(), dec("400"));
    }

    #[test]
    fn test_daily_rate_from_hourly_amount() {
        let settings = model("50", RateType::Hourly, "09:00", "17:00", false);
        assert_eq!(settings.daily_rate(), dec("400"));
    }

    #[test]
    fn test_daily_rate_from_annual_amount() {
        // 104400 / 261 = 400
        let settings = model("104400", RateType::Annual, "09:00", "17:00", false);
        assert_eq!(settings.daily_rate(), dec("400"));
    }

    #[test]
    fn test_annual_rate_from_daily_amount() {
        let settings = model("400", RateType::Daily, "09:00", "17:00", false);
        assert_eq!(settings.annual_rate(), dec("104400"));
    }

    #[test]
    fn test_annual_rate_from_hourly_amount() {
        // 8h × 50 × 261 = 104400
        let settings = model("50", RateType::Hourly, "09:00", "17:00", false);
        assert_eq!(settings.annual_rate(), dec("104400"));
    }

    #[test]
    fn test_annual_rate_from_annual_amount() {
        let settings = model("104400", RateType::Annual, "09:00", "17:00", false);
        assert_eq!(settings.annual_rate(), dec("104400"));
    }

    #[test]
    fn test_weekend_schedule_uses_365_for_annual_derivation() {
        let settings = model("36500", RateType::Annual, "09:00", "17:00", true);
        assert_eq!(settings.daily_rate(), dec("100"));
    }

    #[test]
    fn test_overnight_hourly_daily_rate() {
        // 22:00-06:00 is 8 hours regardless of the midnight crossing
        let settings = model("50", RateType::Hourly, "22:00", "06:00", false);
        assert_eq!(settings.daily_rate(), dec("400"));
    }

    #[test]
    fn test_settings_serialization_round_trip() {
        let settings = model("800", RateType::Daily, "22:00", "06:00", true);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: PayRateModel = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
