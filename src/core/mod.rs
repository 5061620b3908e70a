//! Core types and unit conversion data for the waypoint planner

pub mod types;
pub mod units;

pub use types::*;
pub use units::conversion_factor;
