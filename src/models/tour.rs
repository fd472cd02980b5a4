//! Closed tour type.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A closed sequence of cities: the first and last entries are the start
/// city and no other city repeats.
///
/// Tours found by the search are built internally; [`Tour::new`] checks the
/// same shape for tours assembled by hand.
///
/// # Examples
///
/// ```
/// use u_roadtrip::models::Tour;
///
/// let tour = Tour::new(["A", "B", "C", "A"]).unwrap();
/// assert_eq!(tour.start(), "A");
/// assert_eq!(tour.num_legs(), 3);
/// assert_eq!(tour.to_string(), "A -> B -> C -> A");
///
/// assert!(Tour::new(["A", "B"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tour {
    cities: Vec<String>,
}

impl Tour {
    /// Creates a tour, checking that it is closed and has no interior repeats.
    pub fn new<I, S>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cities: Vec<String> = cities.into_iter().map(Into::into).collect();
        if cities.len() < 2 {
            return Err(Error::invalid_input("a tour needs at least two entries"));
        }
        if cities.first() != cities.last() {
            return Err(Error::invalid_input(format!(
                "tour must end where it starts ('{}')",
                cities[0]
            )));
        }
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities[..cities.len() - 1] {
            if !seen.insert(city.as_str()) {
                return Err(Error::invalid_input(format!("city '{city}' repeats")));
            }
        }
        Ok(Self { cities })
    }

    pub(crate) fn from_path(cities: Vec<String>) -> Self {
        debug_assert!(cities.len() >= 2 && cities.first() == cities.last());
        Self { cities }
    }

    /// Cities in visiting order, the closing start city included.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// The start (and end) city.
    pub fn start(&self) -> &str {
        &self.cities[0]
    }

    /// Number of entries, the closing repeat included.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: a tour has at least two entries.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of legs (consecutive city pairs).
    pub fn num_legs(&self) -> usize {
        self.cities.len() - 1
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cities
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cities.join(" -> "))
    }
}
