// src/error.rs

use thiserror::Error;

/// Structural problems found while turning a table row into fields.
/// Any of these means the page no longer looks the way the parser expects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("column {column}: colspan {value:?} is not a positive integer")]
    InvalidColspan { column: usize, value: String },

    #[error("{alpha2} column {column}: expected footnote anchor {expected:?}, found {found:?}")]
    AnchorMismatch {
        alpha2: String,
        column: usize,
        expected: &'static str,
        found: String,
    },

    #[error("{alpha2}: row has {found} fields, expected {expected}")]
    RowLength {
        alpha2: String,
        expected: usize,
        found: usize,
    },
}
