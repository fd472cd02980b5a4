//! Per-city population lookup.

mod table;

pub use table::PopulationTable;
