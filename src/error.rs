use std::io;
use thiserror::Error;

/// Failure to read a rational literal such as `3`, `-5/2` or `0.25`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    #[error("empty literal")]
    Empty,

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

/// A rejected input row. The `Display` text is what the reader shows the user
/// before asking for the matrix again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Invalid input. Please try again:")]
    InvalidToken {
        token: String,
        #[source]
        source: ParseFractionError,
    },

    #[error(
        "Invalid input. The matrix must have the same number of columns in each row. Please try again:"
    )]
    ColumnMismatch { expected: usize, got: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read matrix input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
