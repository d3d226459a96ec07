//! Pay rate amount and rate type.
//!
//! This module defines the RateAmount struct and RateType enum for
//! expressing a configured pay rate in one of three units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The unit a pay rate is expressed in.
///
/// The same schedule can be configured with a per-day, per-hour or per-year
/// amount; derivation formulas on [`crate::models::PayRateModel`] convert
/// between them.
///
/// # Example
///
/// ```
/// use earnings_meter::models::RateType;
///
/// let rate_type: RateType = serde_json::from_str("\"hourly\"").unwrap();
/// assert_eq!(rate_type, RateType::Hourly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// The amount is earned per completed shift.
    Daily,
    /// The amount is earned per hour worked.
    Hourly,
    /// The amount is earned per year of working days.
    Annual,
}

impl std::fmt::Display for RateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateType::Daily => write!(f, "daily"),
            RateType::Hourly => write!(f, "hourly"),
            RateType::Annual => write!(f, "annual"),
        }
    }
}

/// A monetary amount tagged with the unit it is expressed in.
///
/// The amount is never negative; an amount of zero represents a rate that
/// has not yet been configured and is rejected before reaching the engine
/// by the settings boundary (see [`crate::config::SettingsLoader`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateAmount {
    /// The monetary amount, `>= 0`.
    pub amount: Decimal,
    /// The unit the amount is expressed in.
    pub rate_type: RateType,
}

impl RateAmount {
    /// Creates a new rate amount.
    pub fn new(amount: Decimal, rate_type: RateType) -> Self {
        Self { amount, rate_type }
    }

    /// Returns whether the rate carries a usable (positive) amount.
    pub fn is_configured(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}
