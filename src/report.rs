//! Rendering ranked tours as text or JSON.

use std::io::Write;

use serde::Serialize;

use crate::config::TripConfig;
use crate::distance::DistanceTable;
use crate::error::Result;
use crate::models::{ScoredTour, Tour, TripSummary};
use crate::summary::summarize;

/// What to include in a report and how to format it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Attach a trip summary to every tour.
    pub summaries: bool,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Only report the first `limit` tours.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    rank: usize,
    score: u64,
    tour: &'a Tour,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<TripSummary>,
}

/// Writes the ranked tours to `out`.
///
/// # Examples
///
/// ```
/// use u_roadtrip::config::TripConfig;
/// use u_roadtrip::distance::DistanceTable;
/// use u_roadtrip::models::{ScoredTour, Tour};
/// use u_roadtrip::report::{write_report, ReportOptions};
///
/// let mut dt = DistanceTable::new(["A", "B"]).unwrap();
/// dt.set("A", "B", 300.0).unwrap();
/// let ranked = vec![ScoredTour::new(60, Tour::new(["A", "B", "A"]).unwrap())];
///
/// let mut out = Vec::new();
/// write_report(&mut out, &ranked, &dt, &TripConfig::default(), &ReportOptions::default()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1. 60  A -> B -> A\n");
/// ```
pub fn write_report<W: Write>(
    out: &mut W,
    ranked: &[ScoredTour],
    distances: &DistanceTable,
    config: &TripConfig,
    options: &ReportOptions,
) -> Result<()> {
    let shown = &ranked[..options.limit.map_or(ranked.len(), |l| l.min(ranked.len()))];

    let entries = shown
        .iter()
        .enumerate()
        .map(|(i, scored)| report_entry(i + 1, scored, distances, config, options))
        .collect::<Result<Vec<_>>>()?;

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    if ranked.is_empty() {
        writeln!(out, "No tours found.")?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}. {}  {}", entry.rank, entry.score, entry.tour)?;
        if let Some(summary) = &entry.summary {
            let legs: Vec<String> = summary
                .leg_distances
                .iter()
                .map(|d| format!("{d}"))
                .collect();
            writeln!(
                out,
                "   total={} days={} legs=[{}]",
                summary.total_distance,
                summary.days_on_road,
                legs.join(", ")
            )?;
        }
    }
    if ranked.len() > entries.len() {
        writeln!(out, "... {} more", ranked.len() - entries.len())?;
    }
    Ok(())
}

fn report_entry<'a>(
    rank: usize,
    scored: &'a ScoredTour,
    distances: &DistanceTable,
    config: &TripConfig,
    options: &ReportOptions,
) -> Result<ReportEntry<'a>> {
    let summary = if options.summaries {
        Some(summarize(distances, &scored.tour, config)?)
    } else {
        None
    };
    Ok(ReportEntry {
        rank,
        score: scored.score,
        tour: &scored.tour,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (DistanceTable, Vec<ScoredTour>) {
        let mut dt = DistanceTable::new(["A", "B", "C"]).expect("valid");
        dt.set("A", "B", 100.0).expect("valid");
        dt.set("B", "C", 150.0).expect("valid");
        dt.set("C", "A", 200.0).expect("valid");
        let ranked = vec![
            ScoredTour::new(65, Tour::new(["A", "B", "C", "A"]).expect("valid")),
            ScoredTour::new(60, Tour::new(["A", "B", "A"]).expect("valid")),
        ];
        (dt, ranked)
    }

    fn render(options: ReportOptions) -> String {
        let (dt, ranked) = fixture();
        let mut out = Vec::new();
        write_report(&mut out, &ranked, &dt, &TripConfig::default(), &options).expect("writable");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_text_with_summaries() {
        let text = render(ReportOptions {
            summaries: true,
            ..Default::default()
        });
        assert_eq!(
            text,
            "1. 65  A -> B -> C -> A\n   total=450 days=1 legs=[100, 150, 200]\n\
             2. 60  A -> B -> A\n   total=200 days=0 legs=[100, 100]\n"
        );
    }

    #[test]
    fn test_limit() {
        let text = render(ReportOptions {
            limit: Some(1),
            ..Default::default()
        });
        assert_eq!(text, "1. 65  A -> B -> C -> A\n... 1 more\n");
    }

    #[test]
    fn test_json() {
        let text = render(ReportOptions {
            json: true,
            summaries: true,
            limit: Some(1),
        });
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["score"], 65);
        assert_eq!(value[0]["tour"][3], "A");
        assert_eq!(value[0]["summary"]["days_on_road"], 1);
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_zero_limit_is_not_empty() {
        let text = render(ReportOptions {
            limit: Some(0),
            ..Default::default()
        });
        assert_eq!(text, "... 2 more\n");
    }

    #[test]
    fn test_empty() {
        let (dt, _) = fixture();
        let mut out = Vec::new();
        write_report(&mut out, &[], &dt, &TripConfig::default(), &ReportOptions::default())
            .expect("writable");
        assert_eq!(String::from_utf8(out).expect("utf8"), "No tours found.\n");
    }
}
