//! Waypoint planner engine
//!
//! Accepts a stream of comma-delimited coordinate triples, one per line. The
//! native coordinate system of the triples can be any permutation of the
//! components (x, y, z), with each axis independently increasing in either
//! direction, in feet, kilometers, meters, or miles. The canonical coordinate
//! system maps each component and direction to (A, B, C) and is always in
//! meters.
//!
//! Both the native and canonical coordinate lists are built eagerly at
//! construction and never mutated afterwards, so a planner is safe to share
//! across read-only callers. Every query returns freshly computed values,
//! never references into the internal lists.

use serde::{Deserialize, Serialize};
use std::io::BufRead;

use crate::core::units::conversion_factor;
use crate::core::{AxisDirection, AxisSelection, Coordinates, Unit};
use crate::planner::error::PlannerError;
use crate::planner::parser;

/// How to interpret the native coordinate system: which physical input axis
/// (and sign) populates each canonical letter, and the unit the input is
/// expressed in.
///
/// All four fields are required, so a half-specified configuration is not
/// representable. The three directions need not reference distinct physical
/// axes; assigning the same axis to two letters replicates that component
/// into both canonical positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// How to interpret the A axis
    pub axis_a: AxisDirection,
    /// How to interpret the B axis
    pub axis_b: AxisDirection,
    /// How to interpret the C axis
    pub axis_c: AxisDirection,
    /// Unit of the native coordinate system
    pub unit_native: Unit,
}

impl AxisConfig {
    pub fn new(
        axis_a: AxisDirection,
        axis_b: AxisDirection,
        axis_c: AxisDirection,
        unit_native: Unit,
    ) -> Self {
        Self {
            axis_a,
            axis_b,
            axis_c,
            unit_native,
        }
    }

    /// Loads a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        serde_json::from_str(json).map_err(|e| PlannerError::InvalidConfiguration {
            details: e.to_string(),
        })
    }

    /// Remaps a native triple into the canonical (A, B, C) frame in meters.
    pub fn to_canonical(&self, native: &Coordinates) -> Coordinates {
        let conversion = conversion_factor(Unit::Meters, self.unit_native);
        Coordinates::new(
            self.axis_a.resolve(native) * conversion,
            self.axis_b.resolve(native) * conversion,
            self.axis_c.resolve(native) * conversion,
        )
    }
}

/// Planning tool for linear distances over a path of three-dimensional
/// coordinates.
///
/// Construction ingests the whole input; a planner either comes up with a
/// consistent pair of native/canonical coordinate lists or not at all.
/// Queries are infallible.
#[derive(Debug, Clone)]
pub struct WaypointPlanner {
    config: AxisConfig,
    coordinates_native: Vec<Coordinates>,
    coordinates_canonical: Vec<Coordinates>,
}

impl WaypointPlanner {
    /// Creates a planner by reading every coordinate line from `reader`.
    ///
    /// An I/O error from the reader truncates ingestion as if the stream had
    /// ended; a malformed line fails construction with
    /// [`PlannerError::MalformedRecord`].
    pub fn from_reader(config: AxisConfig, reader: impl BufRead) -> Result<Self, PlannerError> {
        let native = parser::read_records(reader)?;
        Ok(Self::from_records(config, native))
    }

    /// Creates a planner from lines already in memory.
    pub fn from_lines<I, S>(config: AxisConfig, lines: I) -> Result<Self, PlannerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut native = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            match parser::parse_line(line.as_ref()) {
                Ok(Some(record)) => native.push(record),
                Ok(None) => {}
                Err(reason) => {
                    return Err(PlannerError::MalformedRecord {
                        line_number: index + 1,
                        reason,
                    })
                }
            }
        }
        Ok(Self::from_records(config, native))
    }

    fn from_records(config: AxisConfig, native: Vec<Coordinates>) -> Self {
        let canonical = native.iter().map(|r| config.to_canonical(r)).collect();
        Self {
            config,
            coordinates_native: native,
            coordinates_canonical: canonical,
        }
    }

    /// Returns the ingested coordinates, converted to `unit`.
    ///
    /// `canonical` selects the canonical (A, B, C) list, stored in meters;
    /// otherwise the native list, stored in the configured native unit. The
    /// returned vector is a fresh copy on every call.
    pub fn coordinates(&self, canonical: bool, unit: Unit) -> Vec<Coordinates> {
        let (coords, stored) = self.select(canonical);
        let conversion = conversion_factor(unit, stored);
        coords.iter().map(|c| c.scaled(conversion)).collect()
    }

    /// Calculates the intermediate distances between consecutive coordinates
    /// along the path, restricted to the selected components and converted
    /// to `unit`.
    ///
    /// Returns one distance per adjacent pair: N-1 entries for N records,
    /// empty when fewer than two records were ingested.
    pub fn distances(&self, axes: AxisSelection, canonical: bool, unit: Unit) -> Vec<f64> {
        let (coords, stored) = self.select(canonical);
        let conversion = conversion_factor(unit, stored);
        coords
            .windows(2)
            .map(|pair| axes.step_distance(&pair[0], &pair[1]) * conversion)
            .collect()
    }

    /// Calculates the total distance along the path of coordinates. Zero
    /// when fewer than two records were ingested.
    pub fn total_distance(&self, axes: AxisSelection, canonical: bool, unit: Unit) -> f64 {
        self.distances(axes, canonical, unit).iter().sum()
    }

    /// The definition of how to interpret the A axis.
    pub fn axis_a(&self) -> AxisDirection {
        self.config.axis_a
    }

    /// The definition of how to interpret the B axis.
    pub fn axis_b(&self) -> AxisDirection {
        self.config.axis_b
    }

    /// The definition of how to interpret the C axis.
    pub fn axis_c(&self) -> AxisDirection {
        self.config.axis_c
    }

    /// The unit of the native coordinate system.
    pub fn unit_native(&self) -> Unit {
        self.config.unit_native
    }

    /// Number of ingested records.
    pub fn len(&self) -> usize {
        self.coordinates_native.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates_native.is_empty()
    }

    fn select(&self, canonical: bool) -> (&[Coordinates], Unit) {
        if canonical {
            (&self.coordinates_canonical, Unit::Meters)
        } else {
            (&self.coordinates_native, self.config.unit_native)
        }
    }
}
