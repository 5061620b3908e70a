//! Line-oriented parsing of coordinate records
//!
//! Input is one comma-delimited triple per line, fields in native axis order,
//! each field a floating-point literal optionally surrounded by whitespace.
//! Blank and whitespace-only lines are skipped. A line with the wrong field
//! count or a non-numeric field aborts parsing; nothing is salvaged from a
//! malformed stream.

use std::io::BufRead;

use crate::core::Coordinates;
use crate::planner::error::{MalformedReason, PlannerError};

/// Parses a single input line.
///
/// Returns `Ok(None)` for a blank line, `Ok(Some(triple))` for a valid
/// record, and the malformation otherwise. Line numbering is the caller's
/// concern.
pub fn parse_line(line: &str) -> Result<Option<Coordinates>, MalformedReason> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != 3 {
        return Err(MalformedReason::FieldCount {
            found: tokens.len(),
        });
    }

    let mut values = [0.0_f64; 3];
    for (value, token) in values.iter_mut().zip(&tokens) {
        let token = token.trim();
        *value = token.parse().map_err(|_| MalformedReason::NonNumeric {
            token: token.to_string(),
        })?;
    }

    Ok(Some(Coordinates::new(values[0], values[1], values[2])))
}

/// Reads every record from `reader`, in order.
///
/// An I/O error from the underlying reader is treated as end-of-input: the
/// records read so far are returned and the fault is not surfaced. A
/// malformed line fails the whole read.
pub fn read_records(reader: impl BufRead) -> Result<Vec<Coordinates>, PlannerError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            // A broken stream yields whatever was already ingested.
            Err(_) => break,
        };

        match parse_line(&line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(reason) => {
                return Err(PlannerError::MalformedRecord {
                    line_number: index + 1,
                    reason,
                })
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_parse_valid_line() {
        let record = parse_line("1,2,3").unwrap().unwrap();
        assert_eq!(record, Coordinates::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let record = parse_line("  1  ,2,3 ").unwrap().unwrap();
        assert_eq!(record, Coordinates::new(1.0, 2.0, 3.0));

        let record = parse_line(" -1,-3, -5").unwrap().unwrap();
        assert_eq!(record, Coordinates::new(-1.0, -3.0, -5.0));
    }

    #[test]
    fn test_parse_blank_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t  "), Ok(None));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(
            parse_line("1,2"),
            Err(MalformedReason::FieldCount { found: 2 })
        );
        assert_eq!(
            parse_line("1,2,3,4"),
            Err(MalformedReason::FieldCount { found: 4 })
        );
    }

    #[test]
    fn test_parse_non_numeric_field() {
        assert_eq!(
            parse_line("1,two,3"),
            Err(MalformedReason::NonNumeric {
                token: "two".to_string()
            })
        );
    }

    #[test]
    fn test_read_records_skips_blanks() {
        let input = "1,2,3\n\n   \n4,5,6\n";
        let records = read_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Coordinates::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_read_records_reports_line_number() {
        let input = "1,2,3\n\n1,2\n";
        let err = read_records(Cursor::new(input)).unwrap_err();
        assert_eq!(
            err,
            PlannerError::MalformedRecord {
                line_number: 3,
                reason: MalformedReason::FieldCount { found: 2 },
            }
        );
    }

    /// Reader that yields a fixed prefix, then fails instead of reporting EOF.
    struct BrokenReader {
        data: Cursor<&'static [u8]>,
    }

    impl BrokenReader {
        fn new(data: &'static [u8]) -> Self {
            Self {
                data: Cursor::new(data),
            }
        }
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream died")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_read_error_is_end_of_input() {
        let reader = io::BufReader::new(BrokenReader::new(b"1,2,3\n4,5,6\n"));
        let records = read_records(reader).unwrap();
        assert_eq!(records.len(), 2);
    }
}
