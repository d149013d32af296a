//! System-wide IPC limits from `/proc/sys/kernel`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SysvError};

/// Smallest segment size the kernel accepts.
const SHMMIN: u64 = 1;
/// Largest value a semaphore can hold.
const SEMVMX: u64 = 32767;

/// Message queue limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MsgLimits {
    /// Max number of queues.
    pub msgmni: u64,
    /// Max size of one message in bytes.
    pub msgmax: u64,
    /// Default max size of a queue in bytes.
    pub msgmnb: u64,
}

/// Shared memory limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShmLimits {
    /// Max number of segments.
    pub shmmni: u64,
    /// Max total shared memory in pages.
    pub shmall: u64,
    /// Max segment size in bytes.
    pub shmmax: u64,
    /// Min segment size in bytes.
    pub shmmin: u64,
}

/// Semaphore limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SemLimits {
    /// Max semaphores per set.
    pub semmsl: u64,
    /// Max semaphores system wide.
    pub semmns: u64,
    /// Max operations per `semop(2)` call.
    pub semopm: u64,
    /// Max number of sets.
    pub semmni: u64,
    /// Max semaphore value.
    pub semvmx: u64,
}

fn kernel_path(root: &Path, name: &str) -> PathBuf {
    root.join("sys").join("kernel").join(name)
}

fn read_values(path: &Path) -> Result<Vec<u64>> {
    let content = fs::read_to_string(path).map_err(|source| SysvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    content
        .split_whitespace()
        .map(|v| {
            v.parse().map_err(|_| SysvError::Parse {
                path: path.to_path_buf(),
                line: 1,
                reason: format!("invalid number '{}'", v),
            })
        })
        .collect()
}

fn read_value(root: &Path, name: &str) -> Result<u64> {
    let path = kernel_path(root, name);
    let values = read_values(&path)?;
    values.first().copied().ok_or_else(|| SysvError::Parse {
        path,
        line: 1,
        reason: "empty value".to_string(),
    })
}

impl MsgLimits {
    pub(crate) fn read(root: &Path) -> Result<Self> {
        Ok(MsgLimits {
            msgmni: read_value(root, "msgmni")?,
            msgmax: read_value(root, "msgmax")?,
            msgmnb: read_value(root, "msgmnb")?,
        })
    }
}

impl ShmLimits {
    pub(crate) fn read(root: &Path) -> Result<Self> {
        Ok(ShmLimits {
            shmmni: read_value(root, "shmmni")?,
            shmall: read_value(root, "shmall")?,
            shmmax: read_value(root, "shmmax")?,
            shmmin: SHMMIN,
        })
    }
}

impl SemLimits {
    pub(crate) fn read(root: &Path) -> Result<Self> {
        let path = kernel_path(root, "sem");
        let values = read_values(&path)?;
        match values[..] {
            [semmsl, semmns, semopm, semmni] => Ok(SemLimits {
                semmsl,
                semmns,
                semopm,
                semmni,
                semvmx: SEMVMX,
            }),
            _ => Err(SysvError::Parse {
                path,
                line: 1,
                reason: format!("expected 4 values, found {}", values.len()),
            }),
        }
    }
}
