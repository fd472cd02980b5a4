//! Loading the distance and population tables from CSV exports.
//!
//! - [`load_distances`] — `Miles` sheet: a square matrix with city names in
//!   the header row and first column
//! - [`load_populations`] — `Population` sheet: `City,Population` records
//! - [`check_coverage`] — every city with distances also has a population

mod miles;
mod population;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::population::PopulationTable;

pub use miles::load_distances;
pub use population::load_populations;

/// Reads a distance matrix CSV from a file.
pub fn load_distances_file(path: impl AsRef<Path>) -> Result<DistanceTable> {
    load_distances(BufReader::new(open(path.as_ref(), "distance")?))
}

/// Reads a population CSV from a file.
pub fn load_populations_file(path: impl AsRef<Path>) -> Result<PopulationTable> {
    load_populations(BufReader::new(open(path.as_ref(), "population")?))
}

/// Checks that every city in the distance table has a population entry.
pub fn check_coverage(distances: &DistanceTable, populations: &PopulationTable) -> Result<()> {
    let missing: Vec<&str> = distances
        .cities()
        .iter()
        .filter(|city| !populations.contains(city))
        .map(String::as_str)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::data_integrity(format!(
            "no population for: {}",
            missing.join(", ")
        )))
    }
}

fn open(path: &Path, description: &str) -> Result<File> {
    File::open(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open {description} file '{}': {e}", path.display()),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_ok() {
        let dt = DistanceTable::new(["A", "B"]).expect("valid");
        let pt = PopulationTable::from_entries([("A", 1), ("B", 2), ("C", 3)]).expect("valid");
        assert!(check_coverage(&dt, &pt).is_ok());
    }

    #[test]
    fn test_coverage_missing() {
        let dt = DistanceTable::new(["A", "B", "C"]).expect("valid");
        let pt = PopulationTable::from_entries([("B", 2)]).expect("valid");
        let err = check_coverage(&dt, &pt).expect_err("A and C missing");
        assert_eq!(
            err.to_string(),
            "data integrity violation: no population for: A, C"
        );
    }

    #[test]
    fn test_sample_data() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let dt = load_distances_file(dir.join("miles.csv")).expect("valid");
        let pt = load_populations_file(dir.join("population.csv")).expect("valid");
        assert_eq!(dt.size(), 5);
        assert_eq!(dt.distance("San Antonio", "Austin"), Some(80.0));
        assert_eq!(pt.get("Houston"), Some(2_304_580));
        assert!(check_coverage(&dt, &pt).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = load_distances_file("/nonexistent/miles.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
