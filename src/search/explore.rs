//! Depth-first tour enumeration under a daily distance cap.
//!
//! # Algorithm
//!
//! Starting at the start city on day 0, every city within one leg of at most
//! `distance_cap` is tried in table order. Each leg is placed on the current
//! day or the next by [`DayClock::drive`]. A branch:
//!
//! 1. closes with a tour when it reaches the start city on day `day_cap`;
//! 2. otherwise expands only while `day < day_cap` and the city has not been
//!    visited;
//! 3. otherwise yields nothing.
//!
//! The terminal check comes first so that the start city, already visited on
//! day 0, can still close the loop.
//!
//! The visited set is shared by the whole search and never unmarked when a
//! branch returns. Once a subtree has been explored, its cities are closed to
//! later siblings. The path, by contrast, is copied at every call.
//!
//! # Complexity
//!
//! Exponential in the worst case. Depth is bounded by the number of cities,
//! since every expansion marks a new city visited.

use log::debug;

use super::DayClock;
use crate::config::TripConfig;
use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Enumerates every closed tour from `start` that returns after exactly
/// `config.day_cap` day rollovers.
///
/// Returns [`Error::UnknownCity`] if `start` has no row in the table. A
/// start city with no feasible tour, including one with no neighbors within
/// the cap, yields an empty list. A `day_cap` of zero also yields an empty
/// list: a trip that never leaves is not a tour.
///
/// # Examples
///
/// ```
/// use u_roadtrip::config::TripConfig;
/// use u_roadtrip::distance::DistanceTable;
/// use u_roadtrip::search::explore;
///
/// let mut dt = DistanceTable::new(["A", "B", "C"]).unwrap();
/// dt.set("A", "B", 100.0).unwrap();
/// dt.set("B", "C", 150.0).unwrap();
/// dt.set("C", "A", 200.0).unwrap();
///
/// let config = TripConfig::new(2, 250.0).unwrap();
/// let tours = explore("A", &dt, &config).unwrap();
/// assert_eq!(tours.len(), 1);
/// assert_eq!(tours[0].cities(), &["A", "B", "C", "A"]);
/// ```
pub fn explore(start: &str, distances: &DistanceTable, config: &TripConfig) -> Result<Vec<Tour>> {
    let start_index = distances
        .index_of(start)
        .ok_or_else(|| Error::unknown_city(start))?;

    if config.day_cap == 0 {
        debug!("day cap is zero, no tours from '{start}'");
        return Ok(Vec::new());
    }

    debug!(
        "exploring tours from '{start}': cities={} day_cap={} distance_cap={}",
        distances.size(),
        config.day_cap,
        config.distance_cap
    );

    let search = Search {
        distances,
        start: start_index,
        day_cap: config.day_cap,
        distance_cap: config.distance_cap,
    };
    let mut visited = vec![false; distances.size()];
    let paths = search.traverse(&mut visited, start_index, DayClock::default(), &[]);

    let tours: Vec<Tour> = paths
        .into_iter()
        .map(|path| {
            Tour::from_path(
                path.into_iter()
                    .map(|i| distances.name(i).to_string())
                    .collect(),
            )
        })
        .collect();

    debug!("found {} tours from '{start}'", tours.len());
    Ok(tours)
}

struct Search<'a> {
    distances: &'a DistanceTable,
    start: usize,
    day_cap: usize,
    distance_cap: f64,
}

impl Search<'_> {
    fn traverse(
        &self,
        visited: &mut [bool],
        city: usize,
        clock: DayClock,
        path: &[usize],
    ) -> Vec<Vec<usize>> {
        let mut path = path.to_vec();

        if clock.day == self.day_cap && city == self.start {
            path.push(city);
            return vec![path];
        }

        if clock.day < self.day_cap && !visited[city] {
            visited[city] = true;
            path.push(city);

            let mut found = Vec::new();
            for (next, distance) in self.distances.neighbors(city, self.distance_cap) {
                let next_clock = clock.drive(distance, self.distance_cap);
                found.extend(self.traverse(visited, next, next_clock, &path));
            }
            return found;
        }

        Vec::new()
    }
}
