//! Application state for the Earnings Meter Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::CalendarContext;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the calendar context the readings are computed against.
#[derive(Clone)]
pub struct AppState {
    /// The calendar context supplied to every reading calculation.
    calendar: Arc<CalendarContext>,
}

impl AppState {
    /// Creates a new application state with the given calendar context.
    pub fn new(calendar: CalendarContext) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the calendar context.
    pub fn calendar(&self) -> &CalendarContext {
        &self.calendar
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CalendarContext::default())
    }
}
