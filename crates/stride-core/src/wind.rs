//! Wind-based point adjustments
//!
//! Sprints, short hurdles and horizontal jumps are wind-affected outdoors.
//! Headwinds earn extra points, tailwinds beyond the 2.0 m/s legal limit
//! cost points, and anything in the legal tailwind band is neutral.

use crate::tables::Season;

/// Events whose outdoor performances carry a wind reading
pub const WIND_AFFECTED_EVENTS: &[&str] = &["100m", "200m", "100mH", "110mH", "LJ", "TJ"];

/// Points adjustment per m/s of wind away from neutral
const POINTS_PER_METRE_PER_SECOND: f64 = 6.0;

/// Legal tailwind limit in m/s
const LEGAL_TAILWIND: f64 = 2.0;

/// Whether a wind reading applies to this event and season
pub fn needs_wind_input(event: &str, season: Season) -> bool {
    // Indoor events never carry wind readings
    if season == Season::Indoor {
        return false;
    }
    WIND_AFFECTED_EVENTS.contains(&event)
}

/// Points delta for a wind speed in m/s.
///
/// Headwind (`wind <= 0`) adds points, a legal tailwind changes nothing,
/// and a tailwind above the legal limit deducts points.
pub fn points_modification(wind: f64) -> f64 {
    if wind <= 0.0 {
        wind.abs() * POINTS_PER_METRE_PER_SECOND
    } else if wind <= LEGAL_TAILWIND {
        0.0
    } else {
        -(wind - LEGAL_TAILWIND) * POINTS_PER_METRE_PER_SECOND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headwind_adds_points() {
        assert_eq!(points_modification(-2.0), 12.0);
        assert_eq!(points_modification(-5.0), 30.0);
        assert_eq!(points_modification(0.0), 0.0);
    }

    #[test]
    fn test_legal_tailwind_is_neutral() {
        assert_eq!(points_modification(1.5), 0.0);
        assert_eq!(points_modification(2.0), 0.0);
    }

    #[test]
    fn test_illegal_tailwind_deducts_points() {
        assert_eq!(points_modification(3.0), -6.0);
        assert_eq!(points_modification(5.0), -18.0);
        assert!((points_modification(2.1) - -0.6).abs() < 1e-9);
    }

    #[test]
    fn test_wind_applies_outdoors_only() {
        assert!(needs_wind_input("100m", Season::Outdoor));
        assert!(needs_wind_input("LJ", Season::Outdoor));
        assert!(!needs_wind_input("100m", Season::Indoor));
        assert!(!needs_wind_input("400m", Season::Outdoor));
        assert!(!needs_wind_input("Marathon", Season::Outdoor));
    }
}
