//! System-wide usage against kernel limits (`--global`).

use lsipc_sysv::IpcSource;

use crate::columns::IpcClass;
use crate::error::LsipcError;

/// One line of the summary table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub resource: &'static str,
    pub description: &'static str,
    /// Current usage; `None` for limits the kernel does not account.
    pub used: Option<u64>,
    pub limit: u64,
}

impl SummaryLine {
    fn new(resource: &'static str, description: &'static str, used: Option<u64>, limit: u64) -> Self {
        SummaryLine {
            resource,
            description,
            used,
            limit,
        }
    }
}

/// Summary lines for one resource class.
#[rustfmt::skip]
pub fn lines<S>(class: IpcClass, source: &S) -> Result<Vec<SummaryLine>, LsipcError>
where
    S: IpcSource + ?Sized,
{
    let lines = match class {
        IpcClass::Messages => {
            let lim = source.msg_limits()?;
            let queues = source.message_queues()?.len() as u64;
            vec![
                SummaryLine::new("MSGMNI", "Number of message queues", Some(queues), lim.msgmni),
                SummaryLine::new("MSGMAX", "Max size of message (bytes)", None, lim.msgmax),
                SummaryLine::new("MSGMNB", "Default max size of queue (bytes)", None, lim.msgmnb),
            ]
        }
        IpcClass::SharedMemory => {
            let lim = source.shm_limits()?;
            let segs = source.shared_memory()?;
            let bytes: u64 = segs.iter().map(|s| s.size).fold(0, u64::saturating_add);
            let pages = bytes / source.page_size().max(1);
            vec![
                SummaryLine::new("SHMMNI", "Shared memory segments", Some(segs.len() as u64), lim.shmmni),
                SummaryLine::new("SHMALL", "Shared memory pages", Some(pages), lim.shmall),
                SummaryLine::new("SHMMAX", "Max size of shared memory segment (bytes)", None, lim.shmmax),
                SummaryLine::new("SHMMIN", "Min size of shared memory segment (bytes)", None, lim.shmmin),
            ]
        }
        IpcClass::Semaphores => {
            let lim = source.sem_limits()?;
            let sets = source.semaphores()?;
            let sems: u64 = sets.iter().map(|s| s.nsems).sum();
            vec![
                SummaryLine::new("SEMMNS", "Total number of semaphores", Some(sems), lim.semmns),
                SummaryLine::new("SEMMNI", "Number of Semaphore IDs", Some(sets.len() as u64), lim.semmni),
                SummaryLine::new("SEMMSL", "Max semaphores per semaphore set", None, lim.semmsl),
                SummaryLine::new("SEMOPM", "Max number of operations per semop(2)", None, lim.semopm),
                SummaryLine::new("SEMVMX", "Semaphore max value", None, lim.semvmx),
            ]
        }
        IpcClass::Summary => Vec::new(),
    };
    Ok(lines)
}
