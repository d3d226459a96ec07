//! Daily meter reading calculation.
//!
//! This module computes the reading for "today": how much of the shift has
//! elapsed at a given instant and what employment state applies. Handles
//! same-day shifts, overnight (cross-midnight) shifts including the
//! dead-zone reset heuristic, weekend exclusion, and degenerate
//! zero-duration shifts.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{PayRateModel, Reading, SECONDS_PER_DAY};

use super::calendar::CalendarContext;

/// Seconds from midnight to midday, the default dead-zone reset boundary.
pub const MIDDAY_SECONDS: i64 = 43_200;

/// Computes the meter reading for the civil day containing `now`.
///
/// The reading is a pure function of the settings, the instant and the
/// calendar: no clocks are read and no state is kept between calls, so
/// this is cheap enough to drive from a once-per-second timer.
///
/// # Arguments
///
/// * `settings` - The configured schedule and pay rate
/// * `now` - The instant to read the meter at, in the caller's local wall clock
/// * `calendar` - Weekend rules and civil-day arithmetic
///
/// # Behavior
///
/// 1. A weekend day with `runs_on_weekends` disabled is a day off: zero
///    amount, zero progress, nothing else considered.
/// 2. A same-day shift is before work until `start_time`, at work through
///    `end_time` inclusive, and after work past it. While at work,
///    `progress` is the elapsed fraction of the shift and the amount is
///    that fraction of the daily rate.
/// 3. An overnight shift is at work past `start_time` (pre-midnight
///    portion) or before `end_time` (post-midnight portion). In the dead
///    zone between end and start the reading shows the previous night's
///    completed shift until the reset boundary, then resets to before-work
///    ahead of tonight's shift (see [`reset_boundary_seconds`]).
/// 4. A zero-duration shift reads as after-work with the full daily rate;
///    there is no elapsed fraction to divide by.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use earnings_meter::calculation::{CalendarContext, daily_reading};
/// use earnings_meter::models::{PayRateModel, RateAmount, RateType, TimeOfDay};
/// use rust_decimal::Decimal;
///
/// let settings = PayRateModel {
///     rate: RateAmount::new(Decimal::from(800), RateType::Daily),
///     start_time: TimeOfDay::new(9, 0).unwrap(),
///     end_time: TimeOfDay::new(17, 0).unwrap(),
///     runs_on_weekends: false,
/// };
/// let calendar = CalendarContext::default();
///
/// // Wednesday at 13:00, halfway through the shift
/// let now = NaiveDateTime::parse_from_str("2023-06-14 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let reading = daily_reading(&settings, now, &calendar);
/// assert_eq!(reading.amount_earned, Decimal::from(400));
/// assert_eq!(reading.progress(), Decimal::new(5, 1));
/// ```
pub fn daily_reading(
    settings: &PayRateModel,
    now: NaiveDateTime,
    calendar: &CalendarContext,
) -> Reading {
    if calendar.is_weekend(now.date()) && !settings.runs_on_weekends {
        return Reading::day_off();
    }

    let duration = settings.shift_duration_seconds();
    if duration == 0 {
        // Degenerate shift: no fraction to compute, treat as fully earned.
        return Reading::after_work(settings.daily_rate());
    }

    let elapsed = calendar.seconds_since_midnight(now);
    if settings.is_overnight_shift() {
        overnight_reading(settings, elapsed, duration)
    } else {
        same_day_reading(settings, elapsed, duration)
    }
}

/// Returns the dead-zone reset boundary in seconds since midnight.
///
/// Only meaningful for overnight shifts. Before this boundary the meter
/// still shows the previous night's completed earnings; after it the
/// meter has reset ahead of tonight's shift. The boundary is midday when
/// the shift ends in the morning, otherwise the midpoint between end and
/// start. A product heuristic, preserved as-is because it is directly
/// user-visible.
pub fn reset_boundary_seconds(settings: &PayRateModel) -> i64 {
    let start = settings.start_time.seconds_since_midnight();
    let end = settings.end_time.seconds_since_midnight();
    if end < MIDDAY_SECONDS {
        MIDDAY_SECONDS
    } else {
        end + (start - end) / 2
    }
}

fn same_day_reading(settings: &PayRateModel, elapsed: i64, duration: i64) -> Reading {
    let start = settings.start_time.seconds_since_midnight();
    let end = settings.end_time.seconds_since_midnight();

    if elapsed < start {
        return Reading::before_work();
    }
    if elapsed <= end {
        return in_progress_reading(settings, elapsed - start, duration);
    }
    Reading::after_work(settings.daily_rate())
}

fn overnight_reading(settings: &PayRateModel, elapsed: i64, duration: i64) -> Reading {
    let start = settings.start_time.seconds_since_midnight();
    let end = settings.end_time.seconds_since_midnight();

    if elapsed > start {
        // Pre-midnight portion of tonight's shift.
        return in_progress_reading(settings, elapsed - start, duration);
    }
    if elapsed < end {
        // Post-midnight portion of the shift that started yesterday.
        return in_progress_reading(settings, (SECONDS_PER_DAY - start) + elapsed, duration);
    }

    // Dead zone between end and start, entirely pre-midnight: keep showing
    // last night's finished reading until the reset boundary.
    if elapsed < reset_boundary_seconds(settings) {
        Reading::after_work(settings.daily_rate())
    } else {
        Reading::before_work()
    }
}

fn in_progress_reading(settings: &PayRateModel, worked_seconds: i64, duration: i64) -> Reading {
    let progress = Decimal::from(worked_seconds) / Decimal::from(duration);
    Reading::at_work(progress * settings.daily_rate(), progress)
}
