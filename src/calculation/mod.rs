//! Calculation logic for the Earnings Meter Engine.
//!
//! This module contains the reading calculations: the calendar context
//! supplied by callers, the daily reading state machine (including
//! overnight shifts and the dead-zone reset boundary), and multi-day
//! accumulation across a date range.

mod accumulated_reading;
mod calendar;
mod daily_reading;

pub use accumulated_reading::accumulated_reading;
pub use calendar::CalendarContext;
pub use daily_reading::{MIDDAY_SECONDS, daily_reading, reset_boundary_seconds};
