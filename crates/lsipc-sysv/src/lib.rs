//! Read-only access to System V IPC state on Linux.
//!
//! The kernel exposes every live message queue, shared-memory segment and
//! semaphore set as a text table under `/proc/sysvipc`, and the system-wide
//! limits under `/proc/sys/kernel`. [`SysvSource`] parses both; the values
//! that procfs does not publish (per-semaphore values, the page size) come
//! from `semctl(2)` and `sysconf(3)`.
//!
//! Consumers program against the [`IpcSource`] and [`Directory`] traits so
//! that fixtures can stand in for the running system:
//!
//! ```rust,no_run
//! use lsipc_sysv::{IpcSource, SysvSource};
//!
//! let source = SysvSource::new();
//! for seg in source.shared_memory().unwrap() {
//!     println!("{} {} bytes", seg.perm.id, seg.size);
//! }
//! ```

mod error;
mod identity;
mod limits;
mod procfs;
mod sem;
mod source;
mod types;

pub use error::{Result, SysvError};
pub use identity::{Directory, SystemDirectory};
pub use limits::{MsgLimits, SemLimits, ShmLimits};
pub use source::{IpcSource, SysvSource, DEFAULT_PROCFS};
pub use types::{IpcPerm, MsgQueue, SemElement, SemSet, ShmSegment, ShmStatus};
