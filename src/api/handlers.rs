//! HTTP request handlers for the Earnings Meter Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{accumulated_reading, daily_reading};
use crate::models::Reading;

use super::request::{AccumulatedReadingRequest, ReadingRequest};
use super::response::{ApiError, ApiErrorResponse, ReadingResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reading", post(reading_handler))
        .route("/reading/accumulated", post(accumulated_reading_handler))
        .with_state(state)
}

/// Handler for POST /reading.
///
/// Accepts pay rate settings and an instant, and returns the daily meter
/// reading for the civil day containing that instant.
async fn reading_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReadingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let reading_id = Uuid::new_v4();
    info!(reading_id = %reading_id, "Processing daily reading request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(reading_id, rejection),
    };

    let settings = match request.settings.into_model() {
        Ok(settings) => settings,
        Err(err) => {
            warn!(reading_id = %reading_id, error = %err, "Invalid settings");
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error);
        }
    };

    let started = Instant::now();
    let reading = daily_reading(&settings, request.at, state.calendar());
    ok_response(reading_id, reading, started.elapsed().as_micros() as u64)
}

/// Handler for POST /reading/accumulated.
///
/// Accepts pay rate settings, an instant and an accumulation start date,
/// and returns the total reading across the whole span.
async fn accumulated_reading_handler(
    State(state): State<AppState>,
    payload: Result<Json<AccumulatedReadingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let reading_id = Uuid::new_v4();
    info!(reading_id = %reading_id, "Processing accumulated reading request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(reading_id, rejection),
    };

    let settings = match request.settings.into_model() {
        Ok(settings) => settings,
        Err(err) => {
            warn!(reading_id = %reading_id, error = %err, "Invalid settings");
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error);
        }
    };

    let started = Instant::now();
    let reading = accumulated_reading(&settings, request.at, request.since, state.calendar());
    ok_response(reading_id, reading, started.elapsed().as_micros() as u64)
}

/// Builds a 200 response carrying the reading.
fn ok_response(reading_id: Uuid, reading: Reading, duration_us: u64) -> axum::response::Response {
    info!(
        reading_id = %reading_id,
        amount_earned = %reading.amount_earned,
        duration_us,
        "Reading computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ReadingResponse::from_reading(reading_id, reading, duration_us)),
    )
        .into_response()
}

/// Builds the error response for an engine error.
fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction rejection onto the API error shape.
fn rejection_response(reading_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(reading_id = %reading_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(reading_id = %reading_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
