//! HTTP API module for the Earnings Meter Engine.
//!
//! This module provides the REST API endpoints for taking daily and
//! accumulated meter readings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccumulatedReadingRequest, ReadingRequest, SettingsRequest};
pub use response::{ApiError, ReadingResponse};
pub use state::AppState;
