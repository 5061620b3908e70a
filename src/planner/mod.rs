//! Waypoint planning: ingestion, canonicalization, and path queries

pub mod engine;
pub mod error;
pub mod formatting;
pub mod parser;

pub use engine::{AxisConfig, WaypointPlanner};
pub use error::{MalformedReason, PlannerError};
pub use formatting::{CsvFormatter, JsonFormatter, PathReport, TextFormatter};
