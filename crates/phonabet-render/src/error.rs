//! Error types for table rendering.
//!
//! This module provides [`TableError`], the primary error type for all
//! rendering operations. Rendering either completes a full table or fails
//! before any line reaches the output sink; a half-rendered table is never
//! produced.

use std::fmt;

/// Error type for table rendering operations.
#[derive(Debug)]
pub enum TableError {
    /// A row's cell count does not match the table's column count.
    ///
    /// Row indices count the header (when present) as row 0. This is a
    /// caller-input defect, detected before anything is written.
    ColumnMismatch {
        /// Index of the offending row in the effective grid.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Cell count actually found in this row.
        found: usize,
    },

    /// The output sink failed while the assembled table was being written.
    Io(std::io::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ColumnMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            TableError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_mismatch_display() {
        let err = TableError::ColumnMismatch {
            row: 2,
            expected: 6,
            found: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("4 cells"));
        assert!(msg.contains("expected 6"));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
