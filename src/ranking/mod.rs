//! Population-coverage scoring and ranking of tours.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{ScoredTour, Tour};
use crate::population::PopulationTable;

/// Total population of the distinct cities a tour visits.
///
/// The closing return to the start city is not counted twice. The score
/// depends only on the set of cities, not on their order.
///
/// # Examples
///
/// ```
/// use u_roadtrip::models::Tour;
/// use u_roadtrip::population::PopulationTable;
/// use u_roadtrip::ranking::score;
///
/// let pt = PopulationTable::from_entries([("A", 10), ("B", 50), ("C", 5)]).unwrap();
/// let tour = Tour::new(["A", "B", "C", "A"]).unwrap();
/// assert_eq!(score(&pt, &tour).unwrap(), 65);
/// ```
pub fn score(populations: &PopulationTable, tour: &Tour) -> Result<u64> {
    let mut counted = HashSet::with_capacity(tour.len());
    let mut total: u64 = 0;
    for city in tour.cities() {
        if counted.insert(city.as_str()) {
            let population = populations
                .get(city)
                .ok_or_else(|| Error::unknown_city(city.as_str()))?;
            total = total.saturating_add(population);
        }
    }
    Ok(total)
}

/// Scores every tour and sorts them by score, highest first.
///
/// The sort is stable: tours with equal scores keep their input order. This
/// is an implementation detail rather than a guarantee.
pub fn rank(populations: &PopulationTable, tours: &[Tour]) -> Result<Vec<ScoredTour>> {
    let mut ranked = tours
        .iter()
        .map(|tour| -> Result<ScoredTour> {
            Ok(ScoredTour::new(score(populations, tour)?, tour.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn populations() -> PopulationTable {
        PopulationTable::from_entries([("A", 10), ("B", 50), ("C", 5), ("D", 20)]).expect("valid")
    }

    fn tour(cities: &[&str]) -> Tour {
        Tour::new(cities.iter().copied()).expect("valid")
    }

    #[test]
    fn test_score_counts_start_once() {
        assert_eq!(score(&populations(), &tour(&["A", "B", "C", "A"])).expect("known"), 65);
        assert_eq!(score(&populations(), &tour(&["A", "A"])).expect("known"), 10);
    }

    #[test]
    fn test_score_order_independent() {
        let pt = populations();
        let a = score(&pt, &tour(&["A", "B", "C", "A"])).expect("known");
        let b = score(&pt, &tour(&["A", "C", "B", "A"])).expect("known");
        let c = score(&pt, &tour(&["B", "A", "C", "B"])).expect("known");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_score_unknown_city() {
        let result = score(&populations(), &tour(&["A", "Z", "A"]));
        assert!(matches!(result, Err(Error::UnknownCity(c)) if c == "Z"));
    }

    #[test]
    fn test_rank_descending() {
        let tours = vec![
            tour(&["A", "C", "A"]),
            tour(&["A", "B", "D", "A"]),
            tour(&["A", "D", "A"]),
        ];
        let ranked = rank(&populations(), &tours).expect("known");
        let scores: Vec<u64> = ranked.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![80, 30, 15]);
        assert_eq!(ranked[0].tour, tours[1]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let tours = vec![
            tour(&["A", "B", "C", "A"]),
            tour(&["A", "C", "B", "A"]),
        ];
        let ranked = rank(&populations(), &tours).expect("known");
        assert_eq!(ranked[0].tour, tours[0]);
        assert_eq!(ranked[1].tour, tours[1]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&populations(), &[]).expect("nothing to score").is_empty());
    }

    proptest! {
        #[test]
        fn prop_rank_is_sorted(picks in prop::collection::vec(prop::sample::subsequence(vec!["B", "C", "D"], 0..=3), 0..12)) {
            let tours: Vec<Tour> = picks
                .iter()
                .map(|mid| {
                    let mut cities = vec!["A"];
                    cities.extend(mid.iter().copied());
                    cities.push("A");
                    tour(&cities)
                })
                .collect();
            let ranked = rank(&populations(), &tours).expect("known");
            prop_assert_eq!(ranked.len(), tours.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }

        #[test]
        fn prop_score_ignores_order(mid in Just(vec!["B", "C", "D"]).prop_shuffle()) {
            let pt = populations();
            let mut cities = vec!["A"];
            cities.extend(mid.iter().copied());
            cities.push("A");
            prop_assert_eq!(score(&pt, &tour(&cities)).expect("known"), 85);
        }
    }
}
