//! Command line parsing and run configuration.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, CommandFactory, FromArgMatches, Parser};
use lsipc_sysv::DEFAULT_PROCFS;
use lsipc_table::{OutputMode, RenderOptions};

use crate::columns::{self, IpcClass};
use crate::error::LsipcError;
use crate::format::TimeMode;
use crate::select::Selection;

/// Show information on IPC facilities.
#[derive(Debug, Parser)]
#[command(name = "lsipc", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Info about system-wide usage (may be used with -m, -q and -s)
    #[arg(short = 'g', long, conflicts_with_all = ["creator", "time", "id"])]
    pub global: bool,

    /// Print details on resource identified by <id>
    #[arg(short = 'i', long, value_name = "id")]
    pub id: Option<i32>,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Don't print headings
    #[arg(long)]
    pub noheadings: bool,

    /// Don't truncate output
    #[arg(long)]
    pub notruncate: bool,

    /// Display dates in short, full or iso format
    #[arg(long = "time-format", value_name = "type", value_enum, default_value_t)]
    pub time_format: TimeMode,

    /// Print SIZE in bytes rather than in human readable format
    #[arg(short = 'b', long)]
    pub bytes: bool,

    /// Show creator and owner
    #[arg(short = 'c', long, conflicts_with_all = ["id", "output"])]
    pub creator: bool,

    /// Define the columns to output
    #[arg(short = 'o', long, value_name = "list")]
    pub output: Option<String>,

    /// Print numeric permissions (PERMS column)
    #[arg(short = 'P', long = "numeric-perms")]
    pub numeric_perms: bool,

    /// Show attach, detach and change times
    #[arg(short = 't', long, conflicts_with_all = ["id", "output"])]
    pub time: bool,
}

/// Resource options.
#[derive(Debug, Default, Args)]
pub struct ResourceArgs {
    /// Shared memory segments
    #[arg(short = 'm', long)]
    pub shmems: bool,

    /// Message queues
    #[arg(short = 'q', long)]
    pub queues: bool,

    /// Semaphores
    #[arg(short = 's', long)]
    pub semaphores: bool,
}

impl ResourceArgs {
    /// Selected classes in the order they are reported.
    fn classes(&self) -> Vec<IpcClass> {
        [
            (self.queues, IpcClass::Messages),
            (self.shmems, IpcClass::SharedMemory),
            (self.semaphores, IpcClass::Semaphores),
        ]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect()
    }
}

/// Output format flags; at most one may be given.
#[derive(Debug, Default, Args)]
#[group(id = "format", multiple = false)]
pub struct ModeArgs {
    /// Display data in a format similar to /etc/passwd
    #[arg(long = "colon-separate")]
    pub colon: bool,

    /// Display in an export-able output format
    #[arg(short = 'e', long)]
    pub export: bool,

    /// Use the JSON output format
    #[arg(short = 'J', long)]
    pub json: bool,

    /// Display each piece of information on a new line
    #[arg(short = 'n', long)]
    pub newline: bool,

    /// Display in raw mode
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Delimit user entries with a nul character
    #[arg(short = 'z', long)]
    pub print0: bool,
}

impl ModeArgs {
    fn mode(&self) -> Option<OutputMode> {
        [
            (self.colon, OutputMode::Colon),
            (self.export, OutputMode::Export),
            (self.json, OutputMode::Json),
            (self.newline, OutputMode::Newline),
            (self.raw, OutputMode::Raw),
            (self.print0, OutputMode::Nul),
        ]
        .into_iter()
        .find_map(|(on, mode)| on.then_some(mode))
    }
}

/// The clap command, with the column listing appended to the help.
pub fn command() -> clap::Command {
    Cli::command().after_help(columns::help_text())
}

/// Parse `args` (program name first).
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Environment variable overriding the procfs mount point.
pub const PROCFS_ENV: &str = "LSIPC_PROCFS";

/// Where to read IPC state from: `$LSIPC_PROCFS` when set and non-empty.
pub fn procfs_root() -> PathBuf {
    match env::var_os(PROCFS_ENV) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from(DEFAULT_PROCFS),
    }
}

/// Everything a run needs, validated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resource classes to report, in order.
    pub classes: Vec<IpcClass>,
    /// Class whose columns are legal.
    pub active: IpcClass,
    pub id: Option<i32>,
    pub columns: Selection,
    pub render: RenderOptions,
    pub time_mode: TimeMode,
    pub bytes: bool,
    pub numeric_perms: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Config, LsipcError> {
        let mut classes = cli.resources.classes();
        let active = if cli.global {
            if classes.is_empty() {
                classes = vec![
                    IpcClass::Messages,
                    IpcClass::SharedMemory,
                    IpcClass::Semaphores,
                ];
            }
            IpcClass::Summary
        } else {
            match classes[..] {
                [class] => class,
                _ => {
                    return Err(LsipcError::Usage(
                        "One of --shmems, --queues or --semaphores must be specified".into(),
                    ))
                }
            }
        };

        let columns = match (&cli.output, cli.id) {
            (Some(list), _) => Selection::parse(list, active)?,
            (None, Some(_)) => Selection::every_column(active),
            (None, None) => Selection::defaults(active, cli.creator, cli.time),
        };
        log::debug!("active class {:?}, columns {:?}", active, columns.names());

        let mode = match (cli.mode.mode(), cli.id) {
            (Some(mode), _) => mode,
            (None, Some(_)) => OutputMode::Pretty,
            (None, None) => OutputMode::Grid,
        };
        let render = RenderOptions::new(mode)
            .headings(!cli.noheadings)
            .truncate(!cli.notruncate);

        Ok(Config {
            classes,
            active,
            id: cli.id,
            columns,
            render,
            time_mode: cli.time_format,
            bytes: cli.bytes,
            numeric_perms: cli.numeric_perms,
        })
    }

    /// Whether this run reports usage against limits.
    pub fn is_summary(&self) -> bool {
        self.active == IpcClass::Summary
    }
}
