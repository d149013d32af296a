//! Error type of the lsipc command.

use lsipc_sysv::SysvError;
use lsipc_table::TableError;
use thiserror::Error;

use crate::columns::IpcClass;

/// Everything that makes a run fail.
///
/// Configuration errors are raised before any IPC state is read.
#[derive(Debug, Error)]
pub enum LsipcError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column {column} does not apply to {class}")]
    ColumnNotApplicable { column: String, class: IpcClass },

    #[error("too many columns specified, the limit is {limit} columns")]
    TooManyColumns { limit: usize },

    /// Invalid combination of command line options.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Query(#[from] SysvError),

    #[error("failed to render output: {0}")]
    Render(#[from] TableError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LsipcError::UnknownColumn("FOO".into()).to_string(),
            "unknown column: FOO"
        );
        assert_eq!(
            LsipcError::ColumnNotApplicable {
                column: "SIZE".into(),
                class: IpcClass::Messages,
            }
            .to_string(),
            "column SIZE does not apply to message queues"
        );
        assert_eq!(
            LsipcError::TooManyColumns { limit: 60 }.to_string(),
            "too many columns specified, the limit is 60 columns"
        );
    }

    #[test]
    fn test_table_error_converts() {
        let err: LsipcError = TableError::NoSuchCell {
            index: 3,
            columns: 2,
        }
        .into();
        assert!(matches!(err, LsipcError::Render(_)));
    }
}
