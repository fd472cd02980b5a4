//! Dense symmetric distance table keyed by city name.

use std::collections::HashMap;

use crate::error::{Error, Result};

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense n×n table of inter-city distances stored in row-major order.
///
/// Cities keep the order they were supplied in; the tour search visits
/// neighbors in that order. A cell may be undefined (empty in the source
/// sheet), in which case the two cities are not connected. The diagonal is
/// never used as a leg.
///
/// # Examples
///
/// ```
/// use u_roadtrip::distance::DistanceTable;
///
/// let mut dt = DistanceTable::new(["A", "B", "C"]).unwrap();
/// dt.set("A", "B", 100.0).unwrap();
/// assert_eq!(dt.distance("B", "A"), Some(100.0));
/// assert_eq!(dt.distance("A", "C"), None);
/// assert_eq!(dt.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceTable {
    cities: Vec<String>,
    index: HashMap<String, usize>,
    data: Vec<Option<f64>>,
}

impl DistanceTable {
    /// Creates a table over the given cities with every distance undefined.
    ///
    /// Fails with [`Error::InvalidData`] if a city name repeats.
    pub fn new<I, S>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cities: Vec<String> = cities.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(cities.len());
        for (i, city) in cities.iter().enumerate() {
            if index.insert(city.clone(), i).is_some() {
                return Err(Error::invalid_data(format!("duplicate city '{city}'")));
            }
        }
        let size = cities.len();
        Ok(Self {
            cities,
            index,
            data: vec![None; size * size],
        })
    }

    /// Creates a table from an explicit row-major grid.
    ///
    /// The grid is validated: it must be `n * n` long, every defined value
    /// must be finite and nonnegative, and `d(a, b)` must equal `d(b, a)`.
    pub fn from_rows<I, S>(cities: I, data: Vec<Option<f64>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(cities)?;
        if data.len() != table.data.len() {
            return Err(Error::invalid_data(format!(
                "expected {} cells for {} cities, got {}",
                table.data.len(),
                table.size(),
                data.len()
            )));
        }
        table.data = data;
        table.validate()?;
        Ok(table)
    }

    /// Sets the distance between two cities in both directions.
    pub fn set(&mut self, a: &str, b: &str, distance: f64) -> Result<()> {
        check_value(a, b, distance)?;
        let i = self.require(a)?;
        let j = self.require(b)?;
        self.data[i * self.cities.len() + j] = Some(distance);
        self.data[j * self.cities.len() + i] = Some(distance);
        Ok(())
    }

    /// Returns the distance between two city indices, if defined.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.data[from * self.cities.len() + to]
    }

    /// Returns the distance between two named cities, if both exist and the
    /// cell is defined.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.get(i, j)
    }

    /// Index of a city in table order.
    pub fn index_of(&self, city: &str) -> Option<usize> {
        self.index.get(city).copied()
    }

    /// Returns `true` if the table has a row for `city`.
    pub fn contains(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// Name of the city at `index`.
    pub fn name(&self, index: usize) -> &str {
        &self.cities[index]
    }

    /// All cities in table order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of cities in this table.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    /// Cities reachable from `from` with a single leg of at most `cap`,
    /// in table order, paired with the leg distance.
    ///
    /// Undefined cells and `from` itself are skipped.
    pub fn neighbors(&self, from: usize, cap: f64) -> impl Iterator<Item = (usize, f64)> + '_ {
        let n = self.cities.len();
        self.data[from * n..(from + 1) * n]
            .iter()
            .enumerate()
            .filter_map(move |(to, cell)| match *cell {
                Some(d) if to != from && d <= cap => Some((to, d)),
                _ => None,
            })
    }

    /// Returns `true` if the table is symmetric within the given tolerance.
    ///
    /// A cell defined in one direction only counts as asymmetric.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.first_asymmetry(tol).is_none()
    }

    fn first_asymmetry(&self, tol: f64) -> Option<(usize, usize)> {
        let n = self.cities.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let symmetric = match (self.get(i, j), self.get(j, i)) {
                    (Some(a), Some(b)) => (a - b).abs() <= tol,
                    (None, None) => true,
                    _ => false,
                };
                if !symmetric {
                    return Some((i, j));
                }
            }
        }
        None
    }

    fn validate(&self) -> Result<()> {
        let n = self.cities.len();
        for (k, cell) in self.data.iter().enumerate() {
            if let Some(d) = *cell {
                check_value(&self.cities[k / n], &self.cities[k % n], d)?;
            }
        }
        if let Some((i, j)) = self.first_asymmetry(SYMMETRY_TOLERANCE) {
            return Err(Error::data_integrity(format!(
                "distance between '{}' and '{}' is not symmetric",
                self.cities[i], self.cities[j]
            )));
        }
        Ok(())
    }

    fn require(&self, city: &str) -> Result<usize> {
        self.index_of(city).ok_or_else(|| Error::unknown_city(city))
    }
}

fn check_value(a: &str, b: &str, distance: f64) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(Error::data_integrity(format!(
            "distance between '{a}' and '{b}' must be finite and nonnegative, got {distance}"
        )));
    }
    Ok(())
}
