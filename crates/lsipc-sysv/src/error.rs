//! Error types for the System V query layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading IPC state.
#[derive(Debug, Error)]
pub enum SysvError {
    /// A procfs or sysctl file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A procfs table or sysctl value did not have the expected shape.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A `semctl(2)` query failed.
    #[error("semctl({op}) failed for semaphore set {id}: {source}")]
    Semctl {
        op: &'static str,
        id: i32,
        #[source]
        source: nix::errno::Errno,
    },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, SysvError>;
