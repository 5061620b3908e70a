//! Unit conversion table and axis resolution
//!
//! The conversion matrix is process-wide constant data: rows are the target
//! unit, columns the source unit, both indexed by the `Unit` discriminant in
//! declaration order (feet, kilometers, meters, miles). Meters is the
//! implicit international unit; the feet/kilometers/miles entries are the
//! standard factors and their reciprocals, pre-tabulated.

use nalgebra::{Vector2, Vector3};

use crate::core::types::{AxisDirection, AxisSelection, Coordinates, Unit};

/// Multiplicative factors such that
/// `value_in_to = value_in_from * CONVERSION_TO_FROM[to][from]`.
const CONVERSION_TO_FROM: [[f64; 4]; 4] = [
    // from: feet,   kilometers, meters,      miles
    [1.0, 3280.84, 3.28084, 5280.0],            // to feet
    [0.0003048, 1.0, 0.001, 1.60934],           // to kilometers
    [0.3048, 1000.0, 1.0, 1609.34],             // to meters
    [0.000189394, 0.621371, 0.000621371, 1.0],  // to miles
];

/// Returns the factor that converts a length in `from` into a length in `to`.
pub fn conversion_factor(to: Unit, from: Unit) -> f64 {
    CONVERSION_TO_FROM[to as usize][from as usize]
}

impl AxisDirection {
    /// Extracts the physical component this direction names from a native
    /// triple, applying the sign. Native triples carry the input x, y, z in
    /// their first, second, and third slots.
    pub fn resolve(self, native: &Coordinates) -> f64 {
        match self {
            AxisDirection::XPlus => native.first,
            AxisDirection::XMinus => -native.first,
            AxisDirection::YPlus => native.second,
            AxisDirection::YMinus => -native.second,
            AxisDirection::ZPlus => native.third,
            AxisDirection::ZMinus => -native.third,
        }
    }
}

impl AxisSelection {
    /// Distance between two triples restricted to the selected components:
    /// absolute difference for a single component, Euclidean norm of the
    /// component-wise difference otherwise.
    pub fn step_distance(self, beg: &Coordinates, end: &Coordinates) -> f64 {
        match self {
            AxisSelection::First => (end.first - beg.first).abs(),
            AxisSelection::Second => (end.second - beg.second).abs(),
            AxisSelection::Third => (end.third - beg.third).abs(),
            AxisSelection::FirstSecond => {
                Vector2::new(end.first - beg.first, end.second - beg.second).norm()
            }
            AxisSelection::FirstThird => {
                Vector2::new(end.first - beg.first, end.third - beg.third).norm()
            }
            AxisSelection::SecondThird => {
                Vector2::new(end.second - beg.second, end.third - beg.third).norm()
            }
            AxisSelection::FirstSecondThird => Vector3::new(
                end.first - beg.first,
                end.second - beg.second,
                end.third - beg.third,
            )
            .norm(),
        }
    }
}
