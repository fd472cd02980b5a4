//! Scored tour type.

use serde::Serialize;

use super::Tour;

/// A tour paired with the total population of the distinct cities it visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredTour {
    /// Population covered by the tour.
    pub score: u64,
    /// The scored tour.
    pub tour: Tour,
}

impl ScoredTour {
    /// Creates a new scored tour.
    pub fn new(score: u64, tour: Tour) -> Self {
        Self { score, tour }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let st = ScoredTour::new(65, Tour::new(["A", "B", "A"]).expect("valid"));
        let json = serde_json::to_string(&st).expect("serializable");
        assert_eq!(json, r#"{"score":65,"tour":["A","B","A"]}"#);
    }
}
