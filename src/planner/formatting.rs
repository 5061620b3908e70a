//! Path report formatting and serialization
//!
//! Renders planner query results as human-readable text, JSON, or CSV.

use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, Coordinates, Unit};
use crate::planner::engine::WaypointPlanner;

/// A snapshot of one path query: the coordinates in the requested frame and
/// unit, the per-step distances, and their total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReport {
    /// Whether the canonical (A, B, C) frame was queried
    pub canonical: bool,
    /// Unit the coordinates and distances are expressed in
    pub unit: Unit,
    /// Components used for the distance calculation
    pub axes: AxisSelection,
    /// One triple per ingested record
    pub coordinates: Vec<Coordinates>,
    /// One distance per adjacent pair of records
    pub distances: Vec<f64>,
    /// Sum of the per-step distances
    pub total_distance: f64,
}

impl PathReport {
    /// Runs the coordinate and distance queries for one frame/unit/selection
    /// combination.
    pub fn from_planner(
        planner: &WaypointPlanner,
        axes: AxisSelection,
        canonical: bool,
        unit: Unit,
    ) -> Self {
        Self {
            canonical,
            unit,
            axes,
            coordinates: planner.coordinates(canonical, unit),
            distances: planner.distances(axes, canonical, unit),
            total_distance: planner.total_distance(axes, canonical, unit),
        }
    }
}

/// Human-readable formatter, one line per record.
#[derive(Debug, Clone)]
pub struct TextFormatter;

impl Default for TextFormatter {
    fn default() -> Self {
        Self
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_text(&self, report: &PathReport) -> String {
        let mut out = String::new();
        let frame = if report.canonical {
            "canonical"
        } else {
            "native"
        };
        out.push_str(&format!("Coordinates ({}, {:?}):\n", frame, report.unit));
        for c in &report.coordinates {
            out.push_str(&format!("  {}\n", c));
        }
        out.push_str(&format!("Distances ({:?}):\n", report.axes));
        for d in &report.distances {
            out.push_str(&format!("  {}\n", d));
        }
        out.push_str(&format!("Total distance: {}\n", report.total_distance));
        out
    }
}

/// JSON formatter for machine-readable output.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, report: &PathReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

/// CSV formatter mirroring the input line format: one comma-delimited triple
/// per line.
#[derive(Debug, Clone)]
pub struct CsvFormatter;

impl Default for CsvFormatter {
    fn default() -> Self {
        Self
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_csv(&self, report: &PathReport) -> String {
        report
            .coordinates
            .iter()
            .map(|c| format!("{},{},{}\n", c.first, c.second, c.third))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AxisDirection;
    use crate::planner::engine::AxisConfig;

    fn sample_report() -> PathReport {
        let config = AxisConfig::new(
            AxisDirection::XPlus,
            AxisDirection::YPlus,
            AxisDirection::ZPlus,
            Unit::Meters,
        );
        let planner = WaypointPlanner::from_lines(config, ["1,2,3", "4,6,3"]).unwrap();
        PathReport::from_planner(&planner, AxisSelection::FirstSecond, false, Unit::Meters)
    }

    #[test]
    fn test_report_contents() {
        let report = sample_report();
        assert_eq!(report.coordinates.len(), 2);
        assert_eq!(report.distances, vec![5.0]);
        assert_eq!(report.total_distance, 5.0);
    }

    #[test]
    fn test_text_format() {
        let text = TextFormatter::new().format_text(&sample_report());
        assert!(text.contains("(1 2 3)"));
        assert!(text.contains("(4 6 3)"));
        assert!(text.contains("Total distance: 5"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report();
        let json = JsonFormatter::new().format_json(&report).unwrap();
        let parsed: PathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.distances, report.distances);
        assert_eq!(parsed.unit, Unit::Meters);
    }

    #[test]
    fn test_csv_format_matches_input_shape() {
        let csv = CsvFormatter::new().format_csv(&sample_report());
        assert_eq!(csv, "1,2,3\n4,6,3\n");
    }
}
