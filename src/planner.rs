//! End-to-end trip planning: validate the start city, search, rank.

use log::info;

use crate::config::TripConfig;
use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::models::ScoredTour;
use crate::population::PopulationTable;
use crate::ranking::rank;
use crate::search::explore;

/// Finds every feasible tour from `start` and ranks them by population
/// coverage, highest first.
///
/// Fails with [`Error::UnknownCity`] before searching if `start` is missing
/// from either table. An empty result is a valid outcome.
///
/// # Examples
///
/// ```
/// use u_roadtrip::config::TripConfig;
/// use u_roadtrip::distance::DistanceTable;
/// use u_roadtrip::planner::plan;
/// use u_roadtrip::population::PopulationTable;
///
/// let mut dt = DistanceTable::new(["A", "B", "C"]).unwrap();
/// dt.set("A", "B", 100.0).unwrap();
/// dt.set("B", "C", 150.0).unwrap();
/// dt.set("C", "A", 200.0).unwrap();
/// let pt = PopulationTable::from_entries([("A", 10), ("B", 50), ("C", 5)]).unwrap();
///
/// let ranked = plan("A", &dt, &pt, &TripConfig::new(1, 400.0).unwrap()).unwrap();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].score, 65);
/// ```
pub fn plan(
    start: &str,
    distances: &DistanceTable,
    populations: &PopulationTable,
    config: &TripConfig,
) -> Result<Vec<ScoredTour>> {
    config.validate()?;
    if !distances.contains(start) || !populations.contains(start) {
        return Err(Error::unknown_city(start));
    }

    let tours = explore(start, distances, config)?;
    let ranked = rank(populations, &tours)?;
    info!(
        "planned {} tours from '{start}' (days={}, daily cap={})",
        ranked.len(),
        config.day_cap,
        config.distance_cap
    );
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (DistanceTable, PopulationTable) {
        let mut dt = DistanceTable::new(["A", "B", "C", "D"]).expect("valid");
        for (a, b) in [("A", "B"), ("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D")] {
            dt.set(a, b, 100.0).expect("valid");
        }
        let pt = PopulationTable::from_entries([("A", 1), ("B", 10), ("C", 100), ("D", 1000)])
            .expect("valid");
        (dt, pt)
    }

    #[test]
    fn test_plan_ranks_by_population() {
        let (dt, pt) = tables();
        let config = TripConfig::new(2, 150.0).expect("valid");
        let ranked = plan("A", &dt, &pt, &config).expect("known city");
        let tours: Vec<String> = ranked.iter().map(|s| s.tour.to_string()).collect();
        assert_eq!(tours, vec!["A -> B -> D -> A", "A -> B -> C -> A"]);
        assert_eq!(ranked[0].score, 1011);
        assert_eq!(ranked[1].score, 111);
    }

    #[test]
    fn test_plan_unknown_in_populations() {
        let (dt, _) = tables();
        let pt = PopulationTable::from_entries([("B", 10)]).expect("valid");
        let result = plan("A", &dt, &pt, &TripConfig::default());
        assert!(matches!(result, Err(Error::UnknownCity(c)) if c == "A"));
    }

    #[test]
    fn test_plan_unknown_in_distances() {
        let (dt, mut pt) = tables();
        pt.insert("E", 5).expect("new city");
        let result = plan("E", &dt, &pt, &TripConfig::default());
        assert!(matches!(result, Err(Error::UnknownCity(c)) if c == "E"));
    }

    #[test]
    fn test_plan_empty_is_ok() {
        let (dt, pt) = tables();
        let ranked = plan("A", &dt, &pt, &TripConfig::default()).expect("known city");
        // Four cities at 100 apart cannot fill seven days
        assert!(ranked.is_empty());
    }
}
