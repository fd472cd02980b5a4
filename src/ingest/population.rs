use std::io::Read;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::population::PopulationTable;

#[derive(Debug, Deserialize)]
struct PopulationRecord {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Population")]
    population: u64,
}

/// Reads `City,Population` records.
///
/// Extra columns are ignored. A repeated city is an error.
///
/// # Examples
///
/// ```
/// use u_roadtrip::ingest::load_populations;
///
/// let pt = load_populations("City,Population\nA,10\nB,50\n".as_bytes()).unwrap();
/// assert_eq!(pt.get("B"), Some(50));
/// ```
pub fn load_populations<R: Read>(reader: R) -> Result<PopulationTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = PopulationTable::new();
    for record in reader.deserialize() {
        let record: PopulationRecord = record?;
        table.insert(record.city, record.population)?;
    }

    debug!("loaded populations for {} cities", table.len());
    Ok(table)
}
