//! Domain model types for road trip planning.
//!
//! Provides closed tours, tours scored by population coverage, and the
//! per-tour trip summary used for reporting.

mod scored;
mod summary;
mod tour;

pub use scored::ScoredTour;
pub use summary::TripSummary;
pub use tour::Tour;
