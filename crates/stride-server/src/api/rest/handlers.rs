//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::conversions::{parse_number, parse_points};
use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use serde_json::json;
use stride_core::{wind, ProjectionRequest, ScoringError, MAX_POINTS, MIN_POINTS};
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Performance-to-points endpoint
#[axum::debug_handler]
pub(super) async fn calculate_points(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<PointsRequestPayload>,
) -> Result<Json<PointsResponsePayload>, ServerError> {
    let gender = payload.gender.unwrap_or_default();
    let season = payload.season.unwrap_or_default();

    let performance = parse_number(&payload.performance)
        .ok_or_else(|| ServerError::InvalidInput(ScoringError::NotNumeric.to_string()))?;

    info!(
        event = %payload.event_type,
        %gender,
        %season,
        performance,
        "points request"
    );

    let points =
        state
            .engine
            .points_from_performance(&payload.event_type, performance, gender, season)?;

    // Wind readings only move the needle for wind-affected outdoor events
    let wind_modification = payload
        .wind
        .filter(|_| wind::needs_wind_input(&payload.event_type, season))
        .map(wind::points_modification)
        .filter(|delta| *delta != 0.0);

    let points = match wind_modification {
        Some(delta) => (points as f64 + delta)
            .round()
            .clamp(MIN_POINTS as f64, MAX_POINTS as f64) as i32,
        None => points,
    };

    Ok(Json(PointsResponsePayload {
        points,
        wind_modification,
    }))
}

/// Points-to-performance endpoint
#[axum::debug_handler]
pub(super) async fn calculate_performance(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<PerformanceRequestPayload>,
) -> Result<Json<PerformanceResponsePayload>, ServerError> {
    let gender = payload.gender.unwrap_or_default();
    let season = payload.season.unwrap_or_default();

    let points = parse_points(&payload.points)
        .ok_or_else(|| ServerError::InvalidInput("points is not a whole number".to_string()))?;

    info!(
        event = %payload.event_type,
        %gender,
        %season,
        points,
        "performance request"
    );

    let performance =
        state
            .engine
            .performance_from_points(&payload.event_type, points, gender, season)?;

    Ok(Json(PerformanceResponsePayload { performance }))
}

/// Batch projection endpoint
#[axum::debug_handler]
pub(super) async fn calculate_performances_batch(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<BatchRequestPayload>,
) -> Result<Json<BatchResponsePayload>, ServerError> {
    let gender = payload.gender.unwrap_or_default();
    let season = payload.season.unwrap_or_default();

    let request = ProjectionRequest {
        base_points: payload.base_points.as_ref().and_then(parse_points),
        event: payload.event_type.clone(),
        gender: Some(gender),
        season: Some(season),
    };

    info!(
        event = payload.event_type.as_deref().unwrap_or("<missing>"),
        %gender,
        %season,
        base_points = ?request.base_points,
        "batch projection request"
    );

    let performances = state
        .engine
        .project_performances(&request)
        .map_err(|err| match err {
            ScoringError::MissingField(_) => ServerError::MissingFields {
                received: json!({
                    "base_points": payload.base_points,
                    "event_type": payload.event_type,
                    "gender": gender.to_string(),
                    "season": season.to_string(),
                }),
            },
            other => ServerError::InvalidInput(other.to_string()),
        })?;

    Ok(Json(BatchResponsePayload { performances }))
}
