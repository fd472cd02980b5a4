//! Trip summary type.

use serde::Serialize;

/// Reporting figures for one tour: leg distances, their total, and the
/// number of day rollovers under the daily distance cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    /// Sum of all leg distances.
    pub total_distance: f64,
    /// Number of day rollovers while driving the tour.
    pub days_on_road: usize,
    /// Distance of each leg in tour order.
    pub leg_distances: Vec<f64>,
}
