//! Property-based tests for the reading calculations.
//!
//! These properties hold for any schedule the settings form can produce:
//! readings are pure, progress stays within [0, 1], amounts never exceed
//! the daily rate, and weekend exclusion is unconditional.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use earnings_meter::calculation::{CalendarContext, accumulated_reading, daily_reading};
use earnings_meter::models::{PayRateModel, RateAmount, RateType, ReadingStatus, TimeOfDay};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

prop_compose! {
    fn arb_time_of_day()(hour in 0u32..24, minute in 0u32..60) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }
}

prop_compose! {
    fn arb_rate_type()(choice in 0u8..3) -> RateType {
        match choice {
            0 => RateType::Daily,
            1 => RateType::Hourly,
            _ => RateType::Annual,
        }
    }
}

prop_compose! {
    fn arb_settings()(
        amount in 1u32..100_000,
        rate_type in arb_rate_type(),
        start_time in arb_time_of_day(),
        end_time in arb_time_of_day(),
        runs_on_weekends in any::<bool>(),
    ) -> PayRateModel {
        PayRateModel {
            rate: RateAmount::new(Decimal::from(amount), rate_type),
            start_time,
            end_time,
            runs_on_weekends,
        }
    }
}

prop_compose! {
    fn arb_instant()(day_offset in 0i64..3650, second in 0u32..86_400) -> NaiveDateTime {
        let date = base_date() + Duration::days(day_offset);
        date.and_time(NaiveTime::from_num_seconds_from_midnight_opt(second, 0).unwrap())
    }
}

proptest! {
    /// Readings are pure: identical inputs produce identical output.
    #[test]
    fn daily_reading_is_idempotent(settings in arb_settings(), now in arb_instant()) {
        let calendar = CalendarContext::default();
        let first = daily_reading(&settings, now, &calendar);
        let second = daily_reading(&settings, now, &calendar);
        prop_assert_eq!(first, second);
    }

    /// Progress stays within [0, 1] for every input combination.
    #[test]
    fn progress_is_bounded(settings in arb_settings(), now in arb_instant()) {
        let reading = daily_reading(&settings, now, &CalendarContext::default());
        prop_assert!(reading.progress() >= Decimal::ZERO);
        prop_assert!(reading.progress() <= Decimal::ONE);
    }

    /// The amount never goes negative and never exceeds one daily rate.
    #[test]
    fn daily_amount_is_bounded(settings in arb_settings(), now in arb_instant()) {
        let reading = daily_reading(&settings, now, &CalendarContext::default());
        prop_assert!(reading.amount_earned >= Decimal::ZERO);
        prop_assert!(reading.amount_earned <= settings.daily_rate());
    }

    /// Weekends-off schedules read day-off on every weekend instant.
    #[test]
    fn weekend_exclusion_is_unconditional(
        mut settings in arb_settings(),
        now in arb_instant(),
    ) {
        settings.runs_on_weekends = false;
        let calendar = CalendarContext::default();
        prop_assume!(calendar.is_weekend(now.date()));

        let reading = daily_reading(&settings, now, &calendar);
        prop_assert_eq!(reading.status, ReadingStatus::DayOff);
        prop_assert_eq!(reading.amount_earned, Decimal::ZERO);
    }

    /// Accumulation can only add to today's reading, never subtract.
    #[test]
    fn accumulated_amount_dominates_daily(
        settings in arb_settings(),
        now in arb_instant(),
        days_back in 0i64..800,
    ) {
        let calendar = CalendarContext::default();
        let since = calendar.start_of_day(now) - Duration::days(days_back);

        let daily = daily_reading(&settings, now, &calendar);
        let accumulated = accumulated_reading(&settings, now, since, &calendar);

        prop_assert!(accumulated.amount_earned >= daily.amount_earned);
        prop_assert_eq!(accumulated.status, daily.status);
    }
}
