//! Per-run formatting state.

use chrono::{DateTime, Local};

use crate::format::{self, TimeMode};

/// Options that shape cell text, plus the moment the run started.
///
/// Relative dates in short time mode are all computed against the same
/// `now`, taken once when the context is built.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub time_mode: TimeMode,
    /// Print sizes as exact byte counts.
    pub bytes: bool,
    /// Print permissions in octal.
    pub numeric_perms: bool,
    now: DateTime<Local>,
}

impl RunContext {
    pub fn new(time_mode: TimeMode, bytes: bool, numeric_perms: bool) -> Self {
        Self::at(time_mode, bytes, numeric_perms, Local::now())
    }

    /// Context with a fixed `now`.
    pub fn at(time_mode: TimeMode, bytes: bool, numeric_perms: bool, now: DateTime<Local>) -> Self {
        RunContext {
            time_mode,
            bytes,
            numeric_perms,
            now,
        }
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn time(&self, secs: i64) -> Option<String> {
        format::time(self.time_mode, secs, &self.now)
    }

    pub fn size(&self, bytes: u64) -> String {
        if self.bytes {
            bytes.to_string()
        } else {
            format::human_size(bytes)
        }
    }

    pub fn perms(&self, mode: u32) -> String {
        format::perms(mode, self.numeric_perms)
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(TimeMode::default(), false, false)
    }
}
