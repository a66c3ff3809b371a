//! STRIDE Core - Athletics scoring logic
//!
//! This crate provides the pure scoring machinery used by the HTTP server:
//! - Scoring tables (coefficients, event classification, competition bonuses)
//! - The point/performance conversion engine and its inverse
//! - Batch projection of competition-tier performance targets
//! - Wind-based point adjustments

pub mod batch;
pub mod engine;
pub mod error;
pub mod tables;
pub mod wind;

// Re-export commonly used types
pub use batch::{BatchProjection, ProjectionRequest};
pub use engine::{ScoringEngine, MAX_POINTS, MIN_POINTS};
pub use error::{Result, ScoringError};
pub use tables::{Coefficients, EventClass, Gender, ScoringTables, Season};
