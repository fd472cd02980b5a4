//! Crate error type.

use thiserror::Error as ThisError;

/// Errors produced while loading trip data or planning tours.
///
/// An empty search result is never an error: a start city with no feasible
/// tour yields an empty list.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A city is missing from the distance or population table.
    #[error("unknown city: '{0}'")]
    UnknownCity(String),
    /// The loaded tables break an invariant (negative or asymmetric distance,
    /// city without a population entry).
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),
    /// A tour leg has no distance in the table.
    #[error("no distance between '{from}' and '{to}'")]
    MissingDistance {
        /// Leg origin.
        from: String,
        /// Leg destination.
        to: String,
    },
    /// A data file is malformed.
    #[error("invalid data: {0}")]
    InvalidData(String),
    /// A user-supplied value is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unknown_city(city: impl Into<String>) -> Self {
        Self::UnknownCity(city.into())
    }

    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::unknown_city("Boston").to_string(),
            "unknown city: 'Boston'"
        );
        let e = Error::MissingDistance {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(e.to_string(), "no distance between 'A' and 'B'");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
    }
}
