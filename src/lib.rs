//! Waypoint Planner
//!
//! A planning tool for calculating linear distances over a path of
//! three-dimensional coordinates. It accepts comma-delimited coordinate
//! triples, one per line, in an arbitrary native axis convention: any
//! permutation of the components (x, y, z), with each axis independently
//! increasing in either direction, in feet, kilometers, meters, or miles.
//! The canonical coordinate system maps each component and direction to
//! (A, B, C) and is always in meters.
//!
//! Coordinates can be queried back in either frame and any supported unit,
//! and path distances can be computed over any subset of the components.

pub mod core;
pub mod planner;

// Re-export commonly used types
pub use crate::core::{AxisDirection, AxisSelection, Coordinates, Unit};
pub use crate::core::units::conversion_factor;
pub use crate::planner::{AxisConfig, PlannerError, WaypointPlanner};
pub use crate::planner::formatting::{CsvFormatter, JsonFormatter, PathReport, TextFormatter};
