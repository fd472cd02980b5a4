//! Inter-city distance lookup.
//!
//! Provides a dense, symmetric distance table keyed by city name.

mod table;

pub use table::DistanceTable;
