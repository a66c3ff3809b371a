//! Batch performance projection
//!
//! Expands the competition-category bonus table into a grid of required
//! performances for a baseline point total. Each cell is independent: a
//! cell whose point total cannot be converted is recorded as `None` and
//! the rest of the grid still fills in.

use crate::engine::ScoringEngine;
use crate::error::{Result, ScoringError};
use crate::tables::{Gender, Season};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Batch projection input, validated before any cell is computed
#[derive(Debug, Clone, Default)]
pub struct ProjectionRequest {
    pub base_points: Option<i32>,
    pub event: Option<String>,
    pub gender: Option<Gender>,
    pub season: Option<Season>,
}

/// Required performance per place within one category; `None` marks a
/// place whose point total is unattainable for the event
pub type PlacePerformances = BTreeMap<u32, Option<f64>>;

/// Projection grid keyed by category code, in competition-tier order
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct BatchProjection(pub IndexMap<String, PlacePerformances>);

impl ScoringEngine {
    /// Project the performance needed at every (category, place) cell.
    ///
    /// Fails fast with [`ScoringError::MissingField`] if any request field
    /// is absent; after that, no per-cell failure aborts the batch.
    pub fn project_performances(&self, request: &ProjectionRequest) -> Result<BatchProjection> {
        let base_points = request
            .base_points
            .ok_or(ScoringError::MissingField("base_points"))?;
        let event = request
            .event
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or(ScoringError::MissingField("event_type"))?;
        let gender = request.gender.ok_or(ScoringError::MissingField("gender"))?;
        let season = request.season.ok_or(ScoringError::MissingField("season"))?;

        let mut results = IndexMap::new();
        for (category, bonuses) in &self.tables().competitions {
            let mut places = PlacePerformances::new();
            for (&place, &bonus) in bonuses {
                let required = base_points.saturating_add(bonus);
                let cell = match self.performance_from_points(event, required, gender, season) {
                    Ok(performance) => Some(performance),
                    Err(err) => {
                        debug!(
                            category = %category,
                            place,
                            points = required,
                            "cell unattainable: {err}"
                        );
                        None
                    }
                };
                places.insert(place, cell);
            }
            results.insert(category.clone(), places);
        }

        Ok(BatchProjection(results))
    }
}
