//! Typed report errors.
//!
//! Reading a roster back is the one place where malformed input is a hard
//! failure rather than a degraded default, so it gets a real error type the
//! CLI can surface without string matching.

use thiserror::Error;

/// Errors raised when a roster file does not match the fixed schema.
#[derive(Debug, Error)]
pub enum ReportFormatError {
    /// The header row differs from the expected five columns.
    #[error("unexpected report header: {found:?}")]
    Header { found: Vec<String> },

    /// A data row with the wrong number of fields.
    #[error("report row {row} has {found} field(s), expected 5")]
    Row { row: usize, found: usize },
}
