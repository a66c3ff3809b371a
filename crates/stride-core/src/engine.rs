//! Point/performance conversion engine
//!
//! Both conversions are pure functions over the loaded tables. The forward
//! direction floors and clamps into the legal point range; the inverse is the
//! closed-form counterpart with per-class display rounding, so a round trip
//! is only approximate.

use crate::error::{Result, ScoringError};
use crate::tables::{Coefficients, EventClass, Gender, ScoringTables, Season};

/// Lowest legal point total
pub const MIN_POINTS: i32 = 0;

/// Highest legal point total
pub const MAX_POINTS: i32 = 1400;

/// Scoring engine over an immutable set of tables
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    tables: ScoringTables,
}

impl ScoringEngine {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Compute points from a raw performance.
    ///
    /// Field events score `floor(a * (performance - b)^c)`; all other events
    /// score `floor(a * (b - performance)^c)`. The result is clamped to
    /// [`MIN_POINTS`, `MAX_POINTS`]. A negative exponentiation base is
    /// rejected when `c` is fractional: the power is undefined over the
    /// reals. Integral `c` (the combined-events tables) keeps the negative
    /// base, so a combined score above `b` still lands on the curve.
    pub fn points_from_performance(
        &self,
        event: &str,
        performance: f64,
        gender: Gender,
        season: Season,
    ) -> Result<i32> {
        let Coefficients { a, b, c } = self.tables.coefficients(event, gender, season)?;

        if !performance.is_finite() {
            return Err(ScoringError::NotNumeric);
        }

        let base = match self.tables.class_of(event) {
            EventClass::Field => performance - b,
            EventClass::Timed | EventClass::Combined => b - performance,
        };
        if base < 0.0 && c.fract() != 0.0 {
            return Err(ScoringError::PerformanceOutOfDomain {
                event: event.to_string(),
                performance,
            });
        }

        let raw = (a * base.powf(c)).floor();
        if raw.is_nan() {
            return Err(ScoringError::PerformanceOutOfDomain {
                event: event.to_string(),
                performance,
            });
        }
        Ok(raw.clamp(MIN_POINTS as f64, MAX_POINTS as f64) as i32)
    }

    /// Compute the performance required for a point total.
    ///
    /// Closed-form inverse of [`points_from_performance`]: combined events
    /// round to a whole score, everything else to 2 decimals.
    ///
    /// Failing for point totals the event's curve cannot reach is an
    /// expected, recoverable condition; batch projection relies on it.
    ///
    /// [`points_from_performance`]: ScoringEngine::points_from_performance
    pub fn performance_from_points(
        &self,
        event: &str,
        points: i32,
        gender: Gender,
        season: Season,
    ) -> Result<f64> {
        if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
            return Err(ScoringError::PointsOutOfRange(points as i64));
        }

        let Coefficients { a, b, c } = self.tables.coefficients(event, gender, season)?;

        let ratio = points as f64 / a;
        if ratio < 0.0 {
            return Err(ScoringError::UnattainablePoints {
                event: event.to_string(),
                points,
            });
        }

        let root = ratio.powf(1.0 / c);
        let performance = match self.tables.class_of(event) {
            EventClass::Combined => (b + root).round(),
            EventClass::Field => round2(b + root),
            EventClass::Timed => round2(b - root),
        };

        if !performance.is_finite() {
            return Err(ScoringError::UnattainablePoints {
                event: event.to_string(),
                points,
            });
        }

        Ok(performance)
    }
}

/// Round to 2 decimal places for display precision
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
