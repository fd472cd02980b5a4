use std::collections::HashMap;
use std::io::Read;

use log::debug;

use crate::distance::DistanceTable;
use crate::error::{Error, Result};

/// Reads a square distance matrix.
///
/// The header row holds a blank corner cell followed by city names. Each
/// record holds a city name followed by one cell per header city; empty
/// cells leave the distance undefined. Cities keep the record order. Every
/// record city must appear in the header and vice versa, and the matrix
/// must be symmetric.
///
/// # Examples
///
/// ```
/// use u_roadtrip::ingest::load_distances;
///
/// let data = " ,A,B\nA,0,120\nB,120,0\n";
/// let dt = load_distances(data.as_bytes()).unwrap();
/// assert_eq!(dt.distance("A", "B"), Some(120.0));
/// ```
pub fn load_distances<R: Read>(reader: R) -> Result<DistanceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().skip(1).map(str::to_string).collect();
    let column_index: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    if column_index.len() != columns.len() {
        return Err(Error::invalid_data("duplicate city in distance header"));
    }

    let mut rows = Vec::with_capacity(columns.len());
    let mut cells = Vec::with_capacity(columns.len());
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let city = fields
            .next()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::invalid_data("distance row without a city name"))?
            .to_string();
        if !column_index.contains_key(city.as_str()) {
            return Err(Error::invalid_data(format!(
                "city '{city}' has a row but no column"
            )));
        }

        let values = fields
            .map(|field| parse_cell(&city, field))
            .collect::<Result<Vec<_>>>()?;
        if values.len() != columns.len() {
            return Err(Error::invalid_data(format!(
                "row '{city}' has {} cells, expected {}",
                values.len(),
                columns.len()
            )));
        }
        rows.push(city);
        cells.push(values);
    }

    if rows.len() != columns.len() {
        return Err(Error::invalid_data(format!(
            "{} rows for {} columns",
            rows.len(),
            columns.len()
        )));
    }

    // Re-key columns to row order so that table index i is row i
    let row_index: HashMap<&str, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    let n = rows.len();
    let mut data = vec![None; n * n];
    for (r, values) in cells.into_iter().enumerate() {
        for (c, value) in values.into_iter().enumerate() {
            let target = row_index.get(columns[c].as_str()).copied().ok_or_else(|| {
                Error::invalid_data(format!("city '{}' has a column but no row", columns[c]))
            })?;
            data[r * n + target] = value;
        }
    }

    debug!("loaded distances for {n} cities");
    DistanceTable::from_rows(rows, data)
}

fn parse_cell(city: &str, field: &str) -> Result<Option<f64>> {
    if field.is_empty() {
        return Ok(None);
    }
    field.parse::<f64>().map(Some).map_err(|e| {
        Error::invalid_data(format!("row '{city}': cannot parse '{field}' as distance: {e}"))
    })
}
