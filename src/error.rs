use thiserror::Error;

/// Raised when the yearly input tables do not assemble into a 10 x 20 x 3 table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected} yearly tables, found {found}")]
    YearCount { expected: usize, found: usize },

    #[error("yearly table {year_index} has {found} rows, expected {expected}")]
    Rows {
        year_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("yearly table {year_index}, row {row} has {found} columns, expected {expected}")]
    Columns {
        year_index: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("You must enter a valid school name or code.")]
    NotFound { identifier: String },
}

/// Fatal faults detected while assembling the dataset at startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Malformed enrollment dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Enrollment dataset years out of sequence: expected {expected}, found {found}")]
    YearSequence { expected: u16, found: u16 },

    #[error("Enrollment table shape error: {0}")]
    Shape(#[from] ShapeError),
}
