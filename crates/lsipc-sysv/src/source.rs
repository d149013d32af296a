//! The query interface and its procfs-backed implementation.

use std::fs;
use std::path::{Path, PathBuf};

use nix::unistd::{sysconf, SysconfVar};

use crate::error::Result;
use crate::limits::{MsgLimits, SemLimits, ShmLimits};
use crate::procfs;
use crate::sem;
use crate::types::{MsgQueue, SemElement, SemSet, ShmSegment};

/// Where procfs is mounted on a normal system.
pub const DEFAULT_PROCFS: &str = "/proc";

/// Page size assumed when `sysconf` cannot tell.
const FALLBACK_PAGE_SIZE: u64 = 4096;

/// Source of IPC records and limits.
///
/// Lookups by id have default implementations that scan the full listing.
pub trait IpcSource {
    fn message_queues(&self) -> Result<Vec<MsgQueue>>;
    fn shared_memory(&self) -> Result<Vec<ShmSegment>>;
    fn semaphores(&self) -> Result<Vec<SemSet>>;

    /// Current state of every semaphore in `set`.
    fn semaphore_elements(&self, set: &SemSet) -> Result<Vec<SemElement>>;

    fn msg_limits(&self) -> Result<MsgLimits>;
    fn shm_limits(&self) -> Result<ShmLimits>;
    fn sem_limits(&self) -> Result<SemLimits>;

    /// Memory page size in bytes.
    fn page_size(&self) -> u64;

    /// Command line of process `pid`, if it is still running and readable.
    fn command_line(&self, pid: u32) -> Option<String>;

    fn message_queue(&self, id: i32) -> Result<Option<MsgQueue>> {
        Ok(self.message_queues()?.into_iter().find(|q| q.perm.id == id))
    }

    fn shared_memory_segment(&self, id: i32) -> Result<Option<ShmSegment>> {
        Ok(self.shared_memory()?.into_iter().find(|s| s.perm.id == id))
    }

    fn semaphore_set(&self, id: i32) -> Result<Option<SemSet>> {
        Ok(self.semaphores()?.into_iter().find(|s| s.perm.id == id))
    }
}

/// Reads IPC state from a procfs mount.
#[derive(Debug, Clone)]
pub struct SysvSource {
    root: PathBuf,
}

impl SysvSource {
    /// Source rooted at `/proc`.
    pub fn new() -> Self {
        Self::with_root(DEFAULT_PROCFS)
    }

    /// Source rooted at another procfs directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        SysvSource { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SysvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IpcSource for SysvSource {
    fn message_queues(&self) -> Result<Vec<MsgQueue>> {
        let queues = procfs::read_table(&procfs::sysvipc_path(&self.root, "msg"), procfs::msg)?;
        log::debug!("read {} message queues", queues.len());
        Ok(queues)
    }

    fn shared_memory(&self) -> Result<Vec<ShmSegment>> {
        let segs = procfs::read_table(&procfs::sysvipc_path(&self.root, "shm"), procfs::shm)?;
        log::debug!("read {} shared memory segments", segs.len());
        Ok(segs)
    }

    fn semaphores(&self) -> Result<Vec<SemSet>> {
        let sets = procfs::read_table(&procfs::sysvipc_path(&self.root, "sem"), procfs::sem)?;
        log::debug!("read {} semaphore sets", sets.len());
        Ok(sets)
    }

    fn semaphore_elements(&self, set: &SemSet) -> Result<Vec<SemElement>> {
        sem::elements(set.perm.id, set.nsems)
    }

    fn msg_limits(&self) -> Result<MsgLimits> {
        MsgLimits::read(&self.root)
    }

    fn shm_limits(&self) -> Result<ShmLimits> {
        ShmLimits::read(&self.root)
    }

    fn sem_limits(&self) -> Result<SemLimits> {
        SemLimits::read(&self.root)
    }

    fn page_size(&self) -> u64 {
        match sysconf(SysconfVar::PAGE_SIZE) {
            Ok(Some(size)) if size > 0 => size as u64,
            _ => FALLBACK_PAGE_SIZE,
        }
    }

    fn command_line(&self, pid: u32) -> Option<String> {
        let path = self.root.join(pid.to_string()).join("cmdline");
        let raw = fs::read(&path).ok()?;
        let cmdline = String::from_utf8_lossy(&raw)
            .split('\0')
            .filter(|arg| !arg.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!cmdline.is_empty()).then_some(cmdline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        assert_eq!(SysvSource::new().root(), Path::new("/proc"));
    }

    #[test]
    fn test_page_size_is_positive() {
        let size = SysvSource::new().page_size();
        assert!(size >= 1024);
        assert!(size.is_power_of_two());
    }

    #[test]
    fn test_command_line_joins_args() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("42");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("cmdline"), b"/usr/bin/postgres\0-D\0/var/lib/pg\0").unwrap();

        let source = SysvSource::with_root(tmp.path());
        assert_eq!(
            source.command_line(42).as_deref(),
            Some("/usr/bin/postgres -D /var/lib/pg")
        );
        assert_eq!(source.command_line(43), None);
    }

    #[test]
    fn test_empty_command_line_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("7");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("cmdline"), b"").unwrap();
        assert_eq!(SysvSource::with_root(tmp.path()).command_line(7), None);
    }
}
