use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised while constructing a planner.
///
/// Queries on a constructed planner are infallible: every query input is a
/// closed enumeration and the coordinate lists are well formed by
/// construction, so all failure modes live here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlannerError {
    /// The axis/unit configuration is incomplete or unusable
    InvalidConfiguration { details: String },
    /// A non-blank input line did not yield exactly three numeric fields
    MalformedRecord {
        line_number: usize,
        reason: MalformedReason,
    },
}

/// Why a record failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MalformedReason {
    /// The line did not split into exactly 3 comma-separated fields
    FieldCount { found: usize },
    /// A field did not parse as a floating-point number
    NonNumeric { token: String },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidConfiguration { details } => {
                write!(f, "Invalid planner configuration: {}", details)
            }
            PlannerError::MalformedRecord {
                line_number,
                reason,
            } => match reason {
                MalformedReason::FieldCount { found } => write!(
                    f,
                    "Invalid input format on line {}: must be 3 numbers per line, got {} fields",
                    line_number, found
                ),
                MalformedReason::NonNumeric { token } => write!(
                    f,
                    "Invalid input format on line {}: non numeric input '{}'",
                    line_number, token
                ),
            },
        }
    }
}

impl std::error::Error for PlannerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_message() {
        let err = PlannerError::MalformedRecord {
            line_number: 4,
            reason: MalformedReason::FieldCount { found: 2 },
        };
        let message = err.to_string();
        assert!(message.contains("line 4"));
        assert!(message.contains("3 numbers per line"));
    }

    #[test]
    fn test_non_numeric_message() {
        let err = PlannerError::MalformedRecord {
            line_number: 1,
            reason: MalformedReason::NonNumeric {
                token: "abc".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("non numeric input"));
        assert!(message.contains("abc"));
    }
}
