//! Error types for the dataset loaders.

use std::fmt;

/// Errors raised by the loaders themselves. CSV and JSON parse failures
/// propagate unmodified from the underlying parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A requested sensor name is not a column of the loaded table.
    UnknownSensor(String),
    /// The missing-data report declares zero total hours for a year,
    /// which would make the percentage computation divide by zero.
    ZeroTotalHours(i32),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::UnknownSensor(name) => {
                write!(f, "unknown sensor column: {}", name)
            }
            DataError::ZeroTotalHours(year) => {
                write!(
                    f,
                    "missing-data report has zero total hours for year {}",
                    year
                )
            }
        }
    }
}

impl std::error::Error for DataError {}
