//! Core data models for the Earnings Meter Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_rate;
mod rate;
mod reading;
mod time_of_day;

pub use pay_rate::{PayRateModel, SECONDS_PER_DAY};
pub use rate::{RateAmount, RateType};
pub use reading::{Reading, ReadingStatus};
pub use time_of_day::TimeOfDay;
