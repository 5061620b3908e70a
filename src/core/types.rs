//! Core data types for the waypoint planner

use serde::{Deserialize, Serialize};
use std::fmt;

/// A generic coordinate triple defined as (first, second, third).
///
/// Each slot corresponds to a position, not a fixed physical axis; the
/// interpretation depends on which list the triple lives in. In the native
/// list the slots hold the input columns in input order, e.g. (z, y, x). In
/// the canonical list they hold (A, B, C) in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

impl Coordinates {
    pub fn new(first: f64, second: f64, third: f64) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Returns a copy with every component scaled by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            first: self.first * factor,
            second: self.second * factor,
            third: self.third * factor,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.first, self.second, self.third)
    }
}

/// Defines how to interpret a lettered canonical axis (A, B, or C): which
/// physical input axis populates it, and with which sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDirection {
    /// The lettered axis is the input x axis, same direction
    XPlus,
    /// The lettered axis is the input x axis, negated
    XMinus,
    /// The lettered axis is the input y axis, same direction
    YPlus,
    /// The lettered axis is the input y axis, negated
    YMinus,
    /// The lettered axis is the input z axis, same direction
    ZPlus,
    /// The lettered axis is the input z axis, negated
    ZMinus,
}

/// Length units supported for native input and query output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Feet,
    Kilometers,
    Meters,
    Miles,
}

/// Which components of a coordinate triple participate in a distance
/// calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSelection {
    /// First component only; e.g. |x2 - x1|
    First,
    /// Second component only
    Second,
    /// Third component only
    Third,
    /// First and second components; e.g. ||(x2,y2) - (x1,y1)||
    FirstSecond,
    /// First and third components
    FirstThird,
    /// Second and third components
    SecondThird,
    /// All three components
    FirstSecondThird,
}
