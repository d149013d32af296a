//! Per-semaphore state through `semctl(2)`.
//!
//! procfs lists semaphore sets but not the semaphores inside them, so the
//! values are queried directly. The caller needs read permission on the set.

use nix::errno::Errno;

use crate::error::{Result, SysvError};
use crate::types::SemElement;

fn semctl(id: i32, semnum: i32, cmd: libc::c_int, op: &'static str) -> Result<i32> {
    // SAFETY: GETVAL/GETNCNT/GETZCNT/GETPID take no fourth argument and
    // only read kernel state.
    let rc = unsafe { libc::semctl(id, semnum, cmd) };
    if rc < 0 {
        return Err(SysvError::Semctl {
            op,
            id,
            source: Errno::last(),
        });
    }
    Ok(rc)
}

/// Read value, waiter counts and last pid of every semaphore in set `id`.
pub(crate) fn elements(id: i32, nsems: u64) -> Result<Vec<SemElement>> {
    let nsems = i32::try_from(nsems).unwrap_or(i32::MAX);
    (0..nsems)
        .map(|n| {
            Ok(SemElement {
                value: semctl(id, n, libc::GETVAL, "GETVAL")?,
                ncount: semctl(id, n, libc::GETNCNT, "GETNCNT")?,
                zcount: semctl(id, n, libc::GETZCNT, "GETZCNT")?,
                pid: semctl(id, n, libc::GETPID, "GETPID")?,
            })
        })
        .collect()
}
