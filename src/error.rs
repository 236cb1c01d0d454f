use core::fmt;

/// Result alias for `agglo`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the agglomeration engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Ragged input: a row's length differs from the first row's.
    DimensionMismatch {
        /// Expected row length.
        expected: usize,
        /// Found row length.
        found: usize,
    },

    /// A column of the input matrix is entirely NaN, so no statistic can
    /// be computed to fill it.
    MissingValue {
        /// Offending column index.
        column: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::MissingValue { column } => {
                write!(f, "column {column} is entirely NaN")
            }
        }
    }
}

impl std::error::Error for Error {}
