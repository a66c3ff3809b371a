//! Error types for STRIDE Core

use crate::tables::{Gender, Season};
use thiserror::Error;

/// Core scoring error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("no scoring coefficients for event '{event}' ({gender}/{season})")]
    UnknownEvent {
        event: String,
        gender: Gender,
        season: Season,
    },

    #[error("points must be between 0 and 1400, got {0}")]
    PointsOutOfRange(i64),

    #[error("performance {performance} is outside the scoring domain for event '{event}'")]
    PerformanceOutOfDomain { event: String, performance: f64 },

    #[error("performance is not a number")]
    NotNumeric,

    #[error("{points} points cannot be converted to a performance for event '{event}'")]
    UnattainablePoints { event: String, points: i32 },

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
