//! Accumulated meter reading across a date range.
//!
//! This module sums earnings over every calendar day from a chosen start
//! date up to "now", inclusive of the in-progress today. Whole years are
//! monetized at the annual rate; the remaining days are walked one by one
//! so the weekend policy composes correctly with arbitrary start dates.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{PayRateModel, Reading};

use super::calendar::CalendarContext;
use super::daily_reading::{daily_reading, reset_boundary_seconds};

/// Computes total earnings from `since` up to `now`.
///
/// Today's reading (see [`daily_reading`]) supplies both the in-progress
/// amount and the status of the whole accumulated reading; prior days only
/// add to the amount.
///
/// # Arguments
///
/// * `settings` - The configured schedule and pay rate
/// * `now` - The instant to read the meter at
/// * `since` - Start of accumulation; its civil day is the first counted day
/// * `calendar` - Weekend rules and civil-day arithmetic
///
/// # Behavior
///
/// 1. Past earnings run through yesterday; for an overnight shift still
///    before its reset boundary the window is pulled back a further
///    12 hours so the in-progress night is not double counted.
/// 2. The span is decomposed into whole calendar years plus leftover days.
///    Years earn [`PayRateModel::annual_rate`] each; each leftover day
///    earns [`PayRateModel::daily_rate`] when it is a working day under
///    the weekend policy.
/// 3. The walk is O(leftover days), at most a year's worth.
///
/// # Precondition
///
/// `since`'s civil day must not be after `now`. A violation is logged and
/// degrades to a zero before-work reading so a driving UI never renders a
/// negative span.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use earnings_meter::calculation::{CalendarContext, accumulated_reading};
/// use earnings_meter::models::{PayRateModel, RateAmount, RateType, TimeOfDay};
/// use rust_decimal::Decimal;
///
/// let settings = PayRateModel {
///     rate: RateAmount::new(Decimal::from(100), RateType::Daily),
///     start_time: TimeOfDay::new(9, 0).unwrap(),
///     end_time: TimeOfDay::new(17, 0).unwrap(),
///     runs_on_weekends: true,
/// };
/// let calendar = CalendarContext::default();
/// let fmt = "%Y-%m-%d %H:%M:%S";
///
/// // One full prior day plus half of today
/// let since = NaiveDateTime::parse_from_str("2023-01-01 00:00:00", fmt).unwrap();
/// let now = NaiveDateTime::parse_from_str("2023-01-02 13:00:00", fmt).unwrap();
/// let reading = accumulated_reading(&settings, now, since, &calendar);
/// assert_eq!(reading.amount_earned, Decimal::from(150));
/// ```
pub fn accumulated_reading(
    settings: &PayRateModel,
    now: NaiveDateTime,
    since: NaiveDateTime,
    calendar: &CalendarContext,
) -> Reading {
    let since_day = calendar.start_of_day(since);
    if since_day > now {
        warn!(
            since = %since_day,
            now = %now,
            "Accumulation start date is after the reading instant; degrading to an empty reading"
        );
        return Reading::before_work();
    }

    let current = daily_reading(settings, now, calendar);

    let mut past_end = calendar.start_of_day(now);
    if settings.is_overnight_shift()
        && calendar.seconds_since_midnight(now) < reset_boundary_seconds(settings)
    {
        // The overnight shift attributed to yesterday is still running (or
        // still displayed); keep yesterday out of the past-days walk.
        past_end -= Duration::hours(12);
    }

    let (years, anchor) = calendar.whole_years_between(since_day.date(), past_end.date());
    let accumulated_years = Decimal::from(years) * settings.annual_rate();

    let working_days = calendar
        .days_in_range(anchor, past_end.date())
        .filter(|day| settings.runs_on_weekends || !calendar.is_weekend(*day))
        .count();
    let accumulated_days = Decimal::from(working_days as u64) * settings.daily_rate();

    Reading {
        amount_earned: accumulated_years + accumulated_days + current.amount_earned,
        status: current.status,
    }
}
