//! Trip planning parameters.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of day-increments a tour takes before closing.
pub const DEFAULT_DAY_CAP: usize = 7;

/// Maximum distance driven in one day, in the distance table's unit.
pub const DEFAULT_DISTANCE_CAP: f64 = 400.0;

/// Caps that shape the tour search and the trip summaries.
///
/// Missing fields in a serialized config fall back to the defaults.
///
/// # Examples
///
/// ```
/// use u_roadtrip::config::TripConfig;
///
/// let config = TripConfig::default();
/// assert_eq!(config.day_cap, 7);
/// assert_eq!(config.distance_cap, 400.0);
///
/// let small = TripConfig::new(2, 250.0).unwrap();
/// assert_eq!(small.day_cap, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripConfig {
    /// Day-increments that must occur before the tour returns to its start.
    pub day_cap: usize,
    /// Distance that can be driven within a single day.
    pub distance_cap: f64,
}

impl TripConfig {
    /// Creates a validated config.
    pub fn new(day_cap: usize, distance_cap: f64) -> Result<Self> {
        let config = Self {
            day_cap,
            distance_cap,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads a config from JSON.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config in layers: defaults, then the optional JSON file,
    /// then the explicit overrides. Validation runs once, on the result, so
    /// an override can replace a bad value from the file.
    pub fn layered<R: Read>(
        file: Option<R>,
        day_cap: Option<usize>,
        distance_cap: Option<f64>,
    ) -> Result<Self> {
        let mut config = match file {
            Some(reader) => serde_json::from_reader::<_, Self>(reader)?,
            None => Self::default(),
        };
        if let Some(day_cap) = day_cap {
            config.day_cap = day_cap;
        }
        if let Some(distance_cap) = distance_cap {
            config.distance_cap = distance_cap;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks that the distance cap is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.distance_cap.is_finite() || self.distance_cap <= 0.0 {
            return Err(Error::invalid_input(format!(
                "distance cap must be positive and finite, got {}",
                self.distance_cap
            )));
        }
        Ok(())
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            day_cap: DEFAULT_DAY_CAP,
            distance_cap: DEFAULT_DISTANCE_CAP,
        }
    }
}
