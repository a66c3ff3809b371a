//! Scoring tables
//!
//! Static lookup tables supplied as configuration at startup: the per
//! (gender, season, event) coefficient triples, the event classification
//! sets, and the competition-category bonus table. The tables are immutable
//! once loaded; nothing in the engine mutates them.

use crate::error::{Result, ScoringError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Coefficient triple for one (gender, season, event) combination.
///
/// Points are `floor(a * (performance - b)^c)` for field events and
/// `floor(a * (b - performance)^c)` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Athlete gender, as keyed in the coefficient tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Mens,
    Womens,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Mens => write!(f, "mens"),
            Gender::Womens => write!(f, "womens"),
        }
    }
}

/// Competition season, as keyed in the coefficient tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Outdoor,
    Indoor,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Outdoor => write!(f, "outdoor"),
            Season::Indoor => write!(f, "indoor"),
        }
    }
}

/// Event class, resolved by set membership in the classification tables
///
/// The class decides the formula direction and the rounding applied by the
/// inverse conversion. Classification is configuration, never derived from
/// the coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// Lower is better (times); inverse rounds to 2 decimals
    Timed,
    /// Higher is better (distances/heights); inverse rounds to 2 decimals
    Field,
    /// Multi-event score, higher is better; inverse rounds to an integer
    Combined,
}

/// Bonus points per place within one competition category
pub type PlaceBonuses = BTreeMap<u32, i32>;

/// All scoring configuration loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringTables {
    /// gender -> season -> event -> coefficient triple
    pub coefficients: HashMap<Gender, HashMap<Season, HashMap<String, Coefficients>>>,

    /// Events where higher performance is better
    #[serde(default)]
    pub field_events: HashSet<String>,

    /// Combined events (decathlon and friends) scored in whole points
    #[serde(default)]
    pub combined_events: HashSet<String>,

    /// Category code -> place -> bonus points, in competition-tier order
    #[serde(default)]
    pub competitions: IndexMap<String, PlaceBonuses>,
}

impl ScoringTables {
    /// Look up the coefficient triple for a combination, failing if absent
    pub fn coefficients(&self, event: &str, gender: Gender, season: Season) -> Result<Coefficients> {
        self.coefficients
            .get(&gender)
            .and_then(|seasons| seasons.get(&season))
            .and_then(|events| events.get(event))
            .copied()
            .ok_or_else(|| ScoringError::UnknownEvent {
                event: event.to_string(),
                gender,
                season,
            })
    }

    /// Classify an event by set membership
    pub fn class_of(&self, event: &str) -> EventClass {
        if self.field_events.contains(event) {
            EventClass::Field
        } else if self.combined_events.contains(event) {
            EventClass::Combined
        } else {
            EventClass::Timed
        }
    }

    /// Number of coefficient triples across all genders and seasons
    pub fn coefficient_count(&self) -> usize {
        self.coefficients
            .values()
            .flat_map(|seasons| seasons.values())
            .map(|events| events.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tables() -> ScoringTables {
        let yaml = r#"
coefficients:
  mens:
    outdoor:
      100m: { a: 29.3, b: 17.0, c: 1.92 }
      HJ: { a: 490.0, b: 0.75, c: 1.92 }
      Decathlon: { a: 0.0000208, b: 1000.0, c: 2.0 }
field_events: [HJ]
combined_events: [Decathlon]
competitions:
  OW:
    1: 375
    2: 330
  F:
    1: 15
    2: 10
    3: 5
"#;
        serde_yaml::from_str(yaml).expect("sample tables parse")
    }

    #[test]
    fn test_coefficient_lookup() {
        let tables = sample_tables();
        let coeffs = tables
            .coefficients("100m", Gender::Mens, Season::Outdoor)
            .unwrap();
        assert_eq!(coeffs.a, 29.3);
        assert_eq!(coeffs.b, 17.0);
        assert_eq!(coeffs.c, 1.92);
    }

    #[test]
    fn test_unknown_event_lookup_fails() {
        let tables = sample_tables();
        let err = tables
            .coefficients("Hammer Toss", Gender::Mens, Season::Outdoor)
            .unwrap_err();
        assert!(matches!(err, ScoringError::UnknownEvent { .. }));
        assert!(err.to_string().contains("Hammer Toss"));
        assert!(err.to_string().contains("mens/outdoor"));
    }

    #[test]
    fn test_unknown_season_lookup_fails() {
        let tables = sample_tables();
        let err = tables
            .coefficients("100m", Gender::Mens, Season::Indoor)
            .unwrap_err();
        assert!(matches!(err, ScoringError::UnknownEvent { .. }));
    }

    #[test]
    fn test_event_classification() {
        let tables = sample_tables();
        assert_eq!(tables.class_of("HJ"), EventClass::Field);
        assert_eq!(tables.class_of("Decathlon"), EventClass::Combined);
        assert_eq!(tables.class_of("100m"), EventClass::Timed);
        // Unknown events default to the timed class
        assert_eq!(tables.class_of("nonexistent"), EventClass::Timed);
    }

    #[test]
    fn test_competition_table_preserves_order() {
        let tables = sample_tables();
        let categories: Vec<&str> = tables.competitions.keys().map(|s| s.as_str()).collect();
        assert_eq!(categories, vec!["OW", "F"]);

        let places: Vec<u32> = tables.competitions["F"].keys().copied().collect();
        assert_eq!(places, vec![1, 2, 3]);
        assert_eq!(tables.competitions["OW"][&1], 375);
    }

    #[test]
    fn test_coefficient_count() {
        let tables = sample_tables();
        assert_eq!(tables.coefficient_count(), 3);
    }

    #[test]
    fn test_gender_and_season_defaults() {
        assert_eq!(Gender::default(), Gender::Mens);
        assert_eq!(Season::default(), Season::Outdoor);
        assert_eq!(Gender::Womens.to_string(), "womens");
        assert_eq!(Season::Indoor.to_string(), "indoor");
    }
}
