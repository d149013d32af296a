//! Turning IPC records into table rows.

use std::collections::HashMap;

use lsipc_sysv::{Directory, IpcPerm, IpcSource, MsgQueue, SemElement, SemSet, ShmSegment};
use lsipc_table::{Detail, Row, Table};

use crate::columns::ColumnId;
use crate::context::RunContext;
use crate::error::LsipcError;
use crate::format;
use crate::select::Selection;
use crate::summary::SummaryLine;

/// Memoizes directory lookups for the length of one run.
struct NameCache<'a, D: ?Sized> {
    directory: &'a D,
    users: HashMap<u32, Option<String>>,
    groups: HashMap<u32, Option<String>>,
}

impl<'a, D: Directory + ?Sized> NameCache<'a, D> {
    fn new(directory: &'a D) -> Self {
        NameCache {
            directory,
            users: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    /// User name of `uid`, or the number when it has none.
    fn user(&mut self, uid: u32) -> String {
        let directory = self.directory;
        self.users
            .entry(uid)
            .or_insert_with(|| directory.user_name(uid))
            .clone()
            .unwrap_or_else(|| uid.to_string())
    }

    fn group(&mut self, gid: u32) -> String {
        let directory = self.directory;
        self.groups
            .entry(gid)
            .or_insert_with(|| directory.group_name(gid))
            .clone()
            .unwrap_or_else(|| gid.to_string())
    }
}

/// Fills table rows for the selected columns.
pub struct Projector<'a, S: ?Sized, D: ?Sized> {
    ctx: &'a RunContext,
    selection: &'a Selection,
    source: &'a S,
    names: NameCache<'a, D>,
}

impl<'a, S, D> Projector<'a, S, D>
where
    S: IpcSource + ?Sized,
    D: Directory + ?Sized,
{
    pub fn new(ctx: &'a RunContext, selection: &'a Selection, source: &'a S, directory: &'a D) -> Self {
        Projector {
            ctx,
            selection,
            source,
            names: NameCache::new(directory),
        }
    }

    /// A table with one column per selected id.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        for id in self.selection.ids() {
            table.add_column(id.desc().to_column());
        }
        table
    }

    /// Cells every resource class shares.
    fn generic(&mut self, id: ColumnId, perm: &IpcPerm, ctime: i64) -> Option<String> {
        match id {
            ColumnId::Key => Some(format::key(perm.key)),
            ColumnId::Id => Some(perm.id.to_string()),
            ColumnId::Owner | ColumnId::Uid => Some(self.names.user(perm.uid)),
            ColumnId::Perms => Some(self.ctx.perms(perm.mode)),
            ColumnId::Cuid => Some(self.names.user(perm.cuid)),
            ColumnId::Cgid => Some(self.names.group(perm.cgid)),
            ColumnId::Gid => Some(self.names.group(perm.gid)),
            ColumnId::Ctime => self.ctx.time(ctime),
            _ => None,
        }
    }

    fn fill<F>(&mut self, row: &mut Row, mut cell: F) -> Result<(), LsipcError>
    where
        F: FnMut(&mut Self, ColumnId) -> Option<String>,
    {
        let selection = self.selection;
        for (n, id) in selection.ids().iter().enumerate() {
            if let Some(value) = cell(self, *id) {
                row.set(n, value)?;
            }
        }
        Ok(())
    }

    pub fn message_queue<'t>(&mut self, table: &'t mut Table, q: &MsgQueue) -> Result<&'t mut Row, LsipcError> {
        let row = table.new_row();
        self.fill(row, |p, id| match id {
            ColumnId::UsedBytes => Some(p.ctx.size(q.cbytes)),
            ColumnId::Msgs => Some(q.qnum.to_string()),
            ColumnId::Send => p.ctx.time(q.stime),
            ColumnId::Recv => p.ctx.time(q.rtime),
            ColumnId::Lspid => Some(q.lspid.to_string()),
            ColumnId::Lrpid => Some(q.lrpid.to_string()),
            other => p.generic(other, &q.perm, q.ctime),
        })?;
        Ok(row)
    }

    pub fn shared_memory<'t>(&mut self, table: &'t mut Table, seg: &ShmSegment) -> Result<&'t mut Row, LsipcError> {
        let row = table.new_row();
        self.fill(row, |p, id| match id {
            ColumnId::Size => Some(p.ctx.size(seg.size)),
            ColumnId::Nattch => Some(seg.nattch.to_string()),
            ColumnId::Status => Some(seg.status().names().join(",")),
            ColumnId::Attach => p.ctx.time(seg.atime),
            ColumnId::Detach => p.ctx.time(seg.dtime),
            ColumnId::Command => Some(p.source.command_line(seg.cpid).unwrap_or_default()),
            ColumnId::Cpid => Some(seg.cpid.to_string()),
            ColumnId::Lpid => Some(seg.lpid.to_string()),
            other => p.generic(other, &seg.perm, seg.ctime),
        })?;
        Ok(row)
    }

    pub fn semaphore_set<'t>(&mut self, table: &'t mut Table, set: &SemSet) -> Result<&'t mut Row, LsipcError> {
        let row = table.new_row();
        self.fill(row, |p, id| match id {
            ColumnId::Nsems => Some(set.nsems.to_string()),
            ColumnId::Otime => p.ctx.time(set.otime),
            other => p.generic(other, &set.perm, set.ctime),
        })?;
        Ok(row)
    }

    pub fn summary<'t>(&mut self, table: &'t mut Table, line: &SummaryLine) -> Result<&'t mut Row, LsipcError> {
        let row = table.new_row();
        self.fill(row, |_, id| match id {
            ColumnId::Resource => Some(line.resource.to_string()),
            ColumnId::Description => Some(line.description.to_string()),
            ColumnId::Used => line.used.map(|used| used.to_string()),
            ColumnId::Limit => Some(line.limit.to_string()),
            ColumnId::UsePercent => line.used.and_then(|used| format::percent(used, line.limit)),
            _ => None,
        })?;
        Ok(row)
    }
}

/// Per-element breakdown of a semaphore set.
pub fn semaphore_detail(elements: &[SemElement]) -> Detail {
    let mut detail = Detail::new(["semnum", "value", "ncount", "zcount", "pid"]);
    for (n, sem) in elements.iter().enumerate() {
        detail.push_row([
            n.to_string(),
            sem.value.to_string(),
            sem.ncount.to_string(),
            sem.zcount.to_string(),
            sem.pid.to_string(),
        ]);
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use lsipc_sysv::{MsgLimits, SemLimits, ShmLimits};

    use crate::columns::IpcClass;
    use crate::format::TimeMode;

    struct Names {
        lookups: Cell<usize>,
    }

    impl Names {
        fn new() -> Self {
            Names {
                lookups: Cell::new(0),
            }
        }
    }

    impl Directory for Names {
        fn user_name(&self, uid: u32) -> Option<String> {
            self.lookups.set(self.lookups.get() + 1);
            match uid {
                0 => Some("root".into()),
                1000 => Some("alice".into()),
                _ => None,
            }
        }

        fn group_name(&self, gid: u32) -> Option<String> {
            self.lookups.set(self.lookups.get() + 1);
            (gid == 100).then(|| "users".to_string())
        }
    }

    struct Commands;

    impl IpcSource for Commands {
        fn message_queues(&self) -> lsipc_sysv::Result<Vec<MsgQueue>> {
            Ok(Vec::new())
        }
        fn shared_memory(&self) -> lsipc_sysv::Result<Vec<ShmSegment>> {
            Ok(Vec::new())
        }
        fn semaphores(&self) -> lsipc_sysv::Result<Vec<SemSet>> {
            Ok(Vec::new())
        }
        fn semaphore_elements(&self, _set: &SemSet) -> lsipc_sysv::Result<Vec<SemElement>> {
            Ok(Vec::new())
        }
        fn msg_limits(&self) -> lsipc_sysv::Result<MsgLimits> {
            Ok(MsgLimits::default())
        }
        fn shm_limits(&self) -> lsipc_sysv::Result<ShmLimits> {
            Ok(ShmLimits::default())
        }
        fn sem_limits(&self) -> lsipc_sysv::Result<SemLimits> {
            Ok(SemLimits::default())
        }
        fn page_size(&self) -> u64 {
            4096
        }
        fn command_line(&self, pid: u32) -> Option<String> {
            (pid == 42).then(|| "postgres -D /data".to_string())
        }
    }

    fn perm(id: i32, uid: u32, gid: u32) -> IpcPerm {
        IpcPerm {
            key: 0x51,
            id,
            uid,
            gid,
            cuid: uid,
            cgid: gid,
            mode: 0o600,
        }
    }

    fn project_shm(list: &str, ctx: &RunContext, segs: &[ShmSegment]) -> Table {
        let selection = Selection::parse(list, IpcClass::SharedMemory).unwrap();
        let names = Names::new();
        let mut projector = Projector::new(ctx, &selection, &Commands, &names);
        let mut table = projector.table();
        for seg in segs {
            projector.shared_memory(&mut table, seg).unwrap();
        }
        table
    }

    #[test]
    fn test_generic_cells() {
        let ctx = RunContext::default();
        let seg = ShmSegment {
            perm: IpcPerm {
                cuid: 0,
                cgid: 7,
                ..perm(3, 1000, 100)
            },
            ..Default::default()
        };
        let table = project_shm("KEY,ID,OWNER,UID,GID,CUID,CGID,PERMS", &ctx, &[seg]);
        let row = &table.rows()[0];
        let cells: Vec<&str> = (0..8).map(|n| row.text(n)).collect();
        assert_eq!(
            cells,
            vec!["0x00000051", "3", "alice", "alice", "users", "root", "7", "rw-------"]
        );
    }

    #[test]
    fn test_shm_cells() {
        let ctx = RunContext::new(TimeMode::Short, true, true);
        let seg = ShmSegment {
            perm: IpcPerm {
                mode: 0o2000 | 0o1000 | 0o644,
                ..perm(1, 0, 0)
            },
            size: 65536,
            cpid: 42,
            lpid: 43,
            nattch: 2,
            ..Default::default()
        };
        let table = project_shm("SIZE,NATTCH,STATUS,COMMAND,CPID,LPID,PERMS", &ctx, &[seg]);
        let row = &table.rows()[0];
        assert_eq!(row.get(0), Some("65536"));
        assert_eq!(row.get(1), Some("2"));
        assert_eq!(row.get(2), Some("dest,locked"));
        assert_eq!(row.get(3), Some("postgres -D /data"));
        assert_eq!(row.get(4), Some("42"));
        assert_eq!(row.get(5), Some("43"));
        assert_eq!(row.get(6), Some("0644"));
    }

    #[test]
    fn test_empty_status_and_missing_command() {
        let ctx = RunContext::default();
        let seg = ShmSegment {
            perm: perm(1, 0, 0),
            size: 1536,
            cpid: 9999,
            ..Default::default()
        };
        let table = project_shm("STATUS,COMMAND,SIZE", &ctx, &[seg]);
        let row = &table.rows()[0];
        assert_eq!(row.get(0), Some(""));
        assert_eq!(row.get(1), Some(""));
        assert_eq!(row.get(2), Some("1.5K"));
    }

    #[test]
    fn test_zero_times_are_unset() {
        for mode in [TimeMode::Short, TimeMode::Full, TimeMode::Iso] {
            let ctx = RunContext::new(mode, false, false);
            let table = project_shm("ATTACH,DETACH,CTIME", &ctx, &[ShmSegment::default()]);
            assert!(table.rows()[0].cells().iter().all(Option::is_none));

            let selection = Selection::parse("SEND,RECV,CTIME", IpcClass::Messages).unwrap();
            let names = Names::new();
            let mut projector = Projector::new(&ctx, &selection, &Commands, &names);
            let mut table = projector.table();
            let row = projector.message_queue(&mut table, &MsgQueue::default()).unwrap();
            assert!(row.cells().iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_name_lookups_are_cached_per_id() {
        let ctx = RunContext::default();
        let selection = Selection::parse("OWNER", IpcClass::Semaphores).unwrap();
        let names = Names::new();
        let mut projector = Projector::new(&ctx, &selection, &Commands, &names);
        let mut table = projector.table();
        for (id, uid) in [(1, 1000), (2, 1000), (3, 0), (4, 1000), (5, 5)] {
            let set = SemSet {
                perm: perm(id, uid, 0),
                ..Default::default()
            };
            projector.semaphore_set(&mut table, &set).unwrap();
        }
        let owners: Vec<&str> = table.rows().iter().map(|r| r.text(0)).collect();
        assert_eq!(owners, vec!["alice", "alice", "root", "alice", "5"]);
        assert_eq!(names.lookups.get(), 3);
    }

    #[test]
    fn test_summary_cells() {
        let ctx = RunContext::default();
        let selection = Selection::parse("RESOURCE,USED,LIMIT,USE%", IpcClass::Summary).unwrap();
        let names = Names::new();
        let mut projector = Projector::new(&ctx, &selection, &Commands, &names);
        let mut table = projector.table();

        let used = SummaryLine {
            resource: "MSGMNI",
            description: "Number of message queues",
            used: Some(8),
            limit: 32,
        };
        let row = projector.summary(&mut table, &used).unwrap();
        assert_eq!(row.get(0), Some("MSGMNI"));
        assert_eq!(row.get(1), Some("8"));
        assert_eq!(row.get(2), Some("32"));
        assert_eq!(row.get(3), Some("25.00%"));

        let untracked = SummaryLine {
            used: None,
            ..used
        };
        let row = projector.summary(&mut table, &untracked).unwrap();
        assert_eq!(row.get(1), None);
        assert_eq!(row.get(3), None);
    }

    #[test]
    fn test_semaphore_detail() {
        let detail = semaphore_detail(&[
            SemElement {
                value: 1,
                ncount: 0,
                zcount: 2,
                pid: 300,
            },
            SemElement::default(),
        ]);
        assert_eq!(detail.header, vec!["semnum", "value", "ncount", "zcount", "pid"]);
        assert_eq!(detail.rows[0], vec!["0", "1", "0", "2", "300"]);
        assert_eq!(detail.rows[1], vec!["1", "0", "0", "0", "0"]);
    }
}
