//! Caller-supplied calendar context.
//!
//! The engine never reads a system clock or default locale itself; all
//! calendar knowledge (weekend rules, civil-day boundaries, date-span
//! decomposition) is supplied through a CalendarContext so readings are
//! fully deterministic and testable with fixed inputs.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Weekend rules and civil-day arithmetic for reading calculations.
///
/// Constructed by the caller and passed into every engine operation.
/// The default context treats Saturday and Sunday as the weekend; other
/// conventions (e.g. Friday/Saturday) can be configured.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use earnings_meter::calculation::CalendarContext;
///
/// let calendar = CalendarContext::default();
/// // 2023-01-07 is a Saturday
/// assert!(calendar.is_weekend(NaiveDate::from_ymd_opt(2023, 1, 7).unwrap()));
/// assert!(!calendar.is_weekend(NaiveDate::from_ymd_opt(2023, 1, 9).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct CalendarContext {
    weekend_days: Vec<Weekday>,
}

impl Default for CalendarContext {
    fn default() -> Self {
        Self {
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl CalendarContext {
    /// Creates a calendar context with a custom weekend day set.
    pub fn new(weekend_days: Vec<Weekday>) -> Self {
        Self { weekend_days }
    }

    /// Returns the configured weekend days.
    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend_days
    }

    /// Returns whether the given date falls on a weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&date.weekday())
    }

    /// Returns midnight at the start of the civil day containing `datetime`.
    pub fn start_of_day(&self, datetime: NaiveDateTime) -> NaiveDateTime {
        datetime
            .date()
            .and_hms_opt(0, 0, 0)
            .expect("Valid midnight time")
    }

    /// Returns the number of seconds elapsed since local midnight.
    pub fn seconds_since_midnight(&self, datetime: NaiveDateTime) -> i64 {
        i64::from(datetime.time().num_seconds_from_midnight())
    }

    /// Decomposes the span from `from` to `to` into whole calendar years.
    ///
    /// Returns the number of whole years that fit in the span and the
    /// anchor date reached by advancing `from` by that many years. The
    /// remaining partial year is the range `[anchor, to)`, walkable with
    /// [`Self::days_in_range`].
    ///
    /// Returns `(0, from)` when `from` is not before `to` by at least a
    /// year, including when the range is empty or inverted.
    pub fn whole_years_between(&self, from: NaiveDate, to: NaiveDate) -> (i64, NaiveDate) {
        let mut years = 0;
        let mut anchor = from;
        while let Some(next) = anchor.checked_add_months(Months::new(12)) {
            if next > to {
                break;
            }
            anchor = next;
            years += 1;
        }
        (years, anchor)
    }

    /// Iterates every civil day in `[from, to)`.
    ///
    /// Yields nothing when `from >= to`.
    pub fn days_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = NaiveDate> {
        from.iter_days().take_while(move |day| *day < to)
    }
}
