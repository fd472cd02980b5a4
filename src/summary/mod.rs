//! Trip statistics for reporting.
//!
//! Replays a tour leg by leg with the same day rollover rule the search uses,
//! so a summary always agrees with what the search considered feasible. It
//! never rejects a tour.

use crate::config::TripConfig;
use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::models::{Tour, TripSummary};
use crate::search::DayClock;

/// Computes leg distances, total distance and day rollovers for a tour.
///
/// Fails only when a leg cannot be looked up: [`Error::UnknownCity`] for a
/// city missing from the table, [`Error::MissingDistance`] for an undefined
/// cell.
///
/// # Examples
///
/// ```
/// use u_roadtrip::config::TripConfig;
/// use u_roadtrip::distance::DistanceTable;
/// use u_roadtrip::models::Tour;
/// use u_roadtrip::summary::summarize;
///
/// let mut dt = DistanceTable::new(["A", "B", "C"]).unwrap();
/// dt.set("A", "B", 100.0).unwrap();
/// dt.set("B", "C", 150.0).unwrap();
/// dt.set("C", "A", 200.0).unwrap();
///
/// let tour = Tour::new(["A", "B", "C", "A"]).unwrap();
/// let summary = summarize(&dt, &tour, &TripConfig::default()).unwrap();
/// assert_eq!(summary.total_distance, 450.0);
/// assert_eq!(summary.days_on_road, 1);
/// assert_eq!(summary.leg_distances, vec![100.0, 150.0, 200.0]);
/// ```
pub fn summarize(distances: &DistanceTable, tour: &Tour, config: &TripConfig) -> Result<TripSummary> {
    let mut leg_distances = Vec::with_capacity(tour.num_legs());
    let mut total_distance = 0.0;
    let mut clock = DayClock::default();

    for (from, to) in tour.legs() {
        let distance = leg_distance(distances, from, to)?;
        leg_distances.push(distance);
        total_distance += distance;
        clock = clock.drive(distance, config.distance_cap);
    }

    Ok(TripSummary {
        total_distance,
        days_on_road: clock.day,
        leg_distances,
    })
}

fn leg_distance(distances: &DistanceTable, from: &str, to: &str) -> Result<f64> {
    let i = distances
        .index_of(from)
        .ok_or_else(|| Error::unknown_city(from))?;
    let j = distances.index_of(to).ok_or_else(|| Error::unknown_city(to))?;
    distances.get(i, j).ok_or_else(|| Error::MissingDistance {
        from: from.to_string(),
        to: to.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceTable {
        let mut dt = DistanceTable::new(["A", "B", "C"]).expect("valid");
        dt.set("A", "B", 100.0).expect("valid");
        dt.set("B", "C", 150.0).expect("valid");
        dt.set("C", "A", 200.0).expect("valid");
        dt
    }

    #[test]
    fn test_tight_cap_counts_each_rollover() {
        let config = TripConfig::new(2, 250.0).expect("valid");
        let tour = Tour::new(["A", "B", "C", "A"]).expect("valid");
        let s = summarize(&triangle(), &tour, &config).expect("legs exist");
        assert_eq!(s.days_on_road, 2);
        assert!((s.total_distance - 450.0).abs() < 1e-10);
    }

    #[test]
    fn test_reverse_direction() {
        let tour = Tour::new(["A", "C", "B", "A"]).expect("valid");
        let s = summarize(&triangle(), &tour, &TripConfig::default()).expect("legs exist");
        assert_eq!(s.leg_distances, vec![200.0, 150.0, 100.0]);
        // 200, then 350, then 450 ≥ 400 rolls over
        assert_eq!(s.days_on_road, 1);
    }

    #[test]
    fn test_missing_leg() {
        let mut dt = DistanceTable::new(["A", "B", "C"]).expect("valid");
        dt.set("A", "B", 10.0).expect("valid");
        let tour = Tour::new(["A", "B", "C", "A"]).expect("valid");
        let result = summarize(&dt, &tour, &TripConfig::default());
        assert!(matches!(
            result,
            Err(Error::MissingDistance { ref from, ref to }) if from == "B" && to == "C"
        ));
    }

    #[test]
    fn test_unknown_city() {
        let tour = Tour::new(["A", "Z", "A"]).expect("valid");
        let result = summarize(&triangle(), &tour, &TripConfig::default());
        assert!(matches!(result, Err(Error::UnknownCity(c)) if c == "Z"));
    }

    #[test]
    fn test_never_rejects_overlong_tour() {
        // Legs beyond the cap are narrated, not refused
        let config = TripConfig::new(7, 120.0).expect("valid");
        let tour = Tour::new(["A", "C", "A"]).expect("valid");
        let s = summarize(&triangle(), &tour, &config).expect("legs exist");
        assert_eq!(s.days_on_road, 2);
        assert_eq!(s.total_distance, 400.0);
    }
}
