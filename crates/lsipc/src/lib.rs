//! List System V IPC facilities.
//!
//! The `lsipc` binary is a thin wrapper around this library: [`cli`] turns the
//! command line into a [`Config`], and [`run`] queries an
//! [`IpcSource`](lsipc_sysv::IpcSource), projects the records through the
//! column registry and renders the table.
//!
//! ```rust,no_run
//! use lsipc::{cli, run, Config, RunContext};
//! use lsipc_sysv::{SystemDirectory, SysvSource};
//!
//! let cli = cli::parse_from(["lsipc", "--shmems", "--bytes"]).unwrap();
//! let config = Config::from_cli(&cli).unwrap();
//! let ctx = RunContext::new(config.time_mode, config.bytes, config.numeric_perms);
//! run(
//!     &config,
//!     &ctx,
//!     &SysvSource::new(),
//!     &SystemDirectory,
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! )
//! .unwrap();
//! ```

pub mod cli;
pub mod columns;
mod context;
mod error;
pub mod format;
mod project;
mod run;
mod select;
mod summary;

pub use cli::{Cli, Config};
pub use columns::{ColumnDesc, ColumnId, IpcClass, COLUMNS};
pub use context::RunContext;
pub use error::LsipcError;
pub use format::TimeMode;
pub use project::{semaphore_detail, Projector};
pub use run::run;
pub use select::{Selection, MAX_COLUMNS};
pub use summary::{lines as summary_lines, SummaryLine};
