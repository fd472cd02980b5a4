//! Ordered population table keyed by city name.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Population of each known city.
///
/// Keeps cities in insertion order so that callers listing them (for
/// example the name resolver) see the order of the source table.
///
/// # Examples
///
/// ```
/// use u_roadtrip::population::PopulationTable;
///
/// let pt = PopulationTable::from_entries([("A", 10), ("B", 50)]).unwrap();
/// assert_eq!(pt.get("B"), Some(50));
/// assert_eq!(pt.get("Z"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PopulationTable {
    cities: Vec<String>,
    populations: HashMap<String, u64>,
}

impl PopulationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(city, population)` pairs.
    ///
    /// Fails with [`Error::InvalidData`] if a city repeats.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (city, population) in entries {
            table.insert(city, population)?;
        }
        Ok(table)
    }

    /// Adds a city.
    pub fn insert(&mut self, city: impl Into<String>, population: u64) -> Result<()> {
        let city = city.into();
        if self.populations.contains_key(&city) {
            return Err(Error::invalid_data(format!("duplicate city '{city}'")));
        }
        self.populations.insert(city.clone(), population);
        self.cities.push(city);
        Ok(())
    }

    /// Population of `city`, if known.
    pub fn get(&self, city: &str) -> Option<u64> {
        self.populations.get(city).copied()
    }

    /// Returns `true` if `city` has an entry.
    pub fn contains(&self, city: &str) -> bool {
        self.populations.contains_key(city)
    }

    /// Known cities in insertion order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if no city has been added.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
