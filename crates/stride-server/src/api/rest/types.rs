//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stride_core::{BatchProjection, Gender, ScoringEngine, Season};

/// Application state
///
/// The engine is read-only once built, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Points calculation request
#[derive(Debug, Deserialize)]
pub struct PointsRequestPayload {
    pub event_type: String,

    /// Performance value; the frontend posts formatted strings, so this
    /// accepts a JSON number or a numeric string
    pub performance: serde_json::Value,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub season: Option<Season>,

    /// Wind reading in m/s, honored for wind-affected outdoor events
    #[serde(default)]
    pub wind: Option<f64>,
}

/// Points calculation response
#[derive(Debug, Serialize)]
pub struct PointsResponsePayload {
    pub points: i32,

    /// Points delta applied for the wind reading (only present when a
    /// non-zero adjustment applied)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_modification: Option<f64>,
}

/// Performance calculation request
#[derive(Debug, Deserialize)]
pub struct PerformanceRequestPayload {
    pub event_type: String,

    /// Target point total as a JSON number or numeric string
    pub points: serde_json::Value,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub season: Option<Season>,
}

/// Performance calculation response
#[derive(Debug, Serialize)]
pub struct PerformanceResponsePayload {
    pub performance: f64,
}

/// Batch projection request
///
/// Every field is optional at the transport level; presence is validated
/// before any projection work starts so the error can echo what arrived.
#[derive(Debug, Deserialize)]
pub struct BatchRequestPayload {
    #[serde(default)]
    pub base_points: Option<serde_json::Value>,

    #[serde(default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub season: Option<Season>,
}

/// Batch projection response
#[derive(Debug, Serialize)]
pub struct BatchResponsePayload {
    pub performances: BatchProjection,
}
