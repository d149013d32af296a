//! Records describing live IPC objects.

/// `SHM_DEST`: segment is removed once the last process detaches.
const SHM_DEST: u32 = 0o1000;
/// `SHM_LOCKED`: segment is locked into memory.
const SHM_LOCKED: u32 = 0o2000;
/// `SHM_HUGETLB`: segment is backed by huge pages.
const SHM_HUGETLB: u32 = 0o4000;
/// `SHM_NORESERVE`: no swap space reserved.
const SHM_NORESERVE: u32 = 0o10000;

/// Ownership and permissions shared by every IPC object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IpcPerm {
    pub key: i32,
    pub id: i32,
    pub uid: u32,
    pub gid: u32,
    pub cuid: u32,
    pub cgid: u32,
    /// Permission bits plus object-specific status bits.
    pub mode: u32,
}

/// A message queue (`/proc/sysvipc/msg`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MsgQueue {
    pub perm: IpcPerm,
    /// Bytes currently queued.
    pub cbytes: u64,
    /// Messages currently queued.
    pub qnum: u64,
    pub lspid: u32,
    pub lrpid: u32,
    /// Last send, last receive and last change times; 0 when never set.
    pub stime: i64,
    pub rtime: i64,
    pub ctime: i64,
}

/// A shared-memory segment (`/proc/sysvipc/shm`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShmSegment {
    pub perm: IpcPerm,
    pub size: u64,
    pub cpid: u32,
    pub lpid: u32,
    pub nattch: u64,
    pub atime: i64,
    pub dtime: i64,
    pub ctime: i64,
}

impl ShmSegment {
    pub fn status(&self) -> ShmStatus {
        ShmStatus::from_mode(self.perm.mode)
    }
}

/// A semaphore set (`/proc/sysvipc/sem`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SemSet {
    pub perm: IpcPerm,
    pub nsems: u64,
    pub otime: i64,
    pub ctime: i64,
}

/// State of one semaphore inside a set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SemElement {
    pub value: i32,
    /// Processes waiting for the value to increase.
    pub ncount: i32,
    /// Processes waiting for the value to become zero.
    pub zcount: i32,
    /// Process that performed the last operation.
    pub pid: i32,
}

/// Status flags of a shared-memory segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShmStatus {
    pub dest: bool,
    pub locked: bool,
    pub hugetlb: bool,
    pub noreserve: bool,
}

impl ShmStatus {
    pub fn from_mode(mode: u32) -> Self {
        ShmStatus {
            dest: mode & SHM_DEST != 0,
            locked: mode & SHM_LOCKED != 0,
            hugetlb: mode & SHM_HUGETLB != 0,
            noreserve: mode & SHM_NORESERVE != 0,
        }
    }

    /// Names of the set flags, always in the order dest, locked, hugetlb, noreserve.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.dest, "dest"),
            (self.locked, "locked"),
            (self.hugetlb, "hugetlb"),
            (self.noreserve, "noreserve"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}
