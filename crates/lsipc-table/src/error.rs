//! Error types for table construction and rendering.

use thiserror::Error;

/// Errors raised while filling or printing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A cell was addressed past the last column.
    #[error("failed to set data: cell {index} out of range ({columns} columns)")]
    NoSuchCell { index: usize, columns: usize },

    /// Writing the rendered output failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_cell_display() {
        let err = TableError::NoSuchCell {
            index: 4,
            columns: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to set data"));
        assert!(msg.contains("cell 4"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
    }
}
