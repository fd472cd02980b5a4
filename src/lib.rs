//! # u-roadtrip
//!
//! Multi-day road trip planning: enumerate every closed tour from a start
//! city that fills a fixed number of driving days under a daily distance
//! cap, then rank the tours by the population they cover.
//!
//! ## Modules
//!
//! - [`distance`] — Symmetric inter-city distance table
//! - [`population`] — Per-city population table
//! - [`models`] — Tour, scored tour, and trip summary types
//! - [`search`] — Exhaustive depth-first tour search
//! - [`ranking`] — Population-coverage scoring and ranking
//! - [`summary`] — Per-tour leg distances, mileage, and day count
//! - [`planner`] — Validate, search, and rank in one call
//! - [`config`] — Day and distance caps
//! - [`ingest`] — CSV loading for both tables
//! - [`resolve`] — Fuzzy matching of typed city names
//! - [`report`] — Text and JSON rendering
//! - [`session`] — Interactive query loop
//! - [`logging`] — Logger setup for the binary

pub mod config;
pub mod distance;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod planner;
pub mod population;
pub mod ranking;
pub mod report;
pub mod resolve;
pub mod search;
pub mod session;
pub mod summary;

pub use error::{Error, Result};
