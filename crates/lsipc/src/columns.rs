//! The column registry.
//!
//! Every column lsipc can print is described once in [`COLUMNS`], indexed by
//! [`ColumnId`]. A column belongs to a band: the generic band (`None`) is
//! legal for every resource class, every other column only for its own class.

use std::fmt;

use lsipc_table::Column;

use crate::error::LsipcError;

/// The kind of IPC facility being reported on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IpcClass {
    Messages,
    SharedMemory,
    Semaphores,
    /// System-wide usage and limits (`--global`).
    Summary,
}

impl IpcClass {
    /// Key of the top-level JSON array.
    pub fn table_name(&self) -> &'static str {
        match self {
            IpcClass::Messages => "messages",
            IpcClass::SharedMemory => "sharedmemory",
            IpcClass::Semaphores => "semaphores",
            IpcClass::Summary => "ipclimits",
        }
    }
}

impl fmt::Display for IpcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IpcClass::Messages => "message queues",
            IpcClass::SharedMemory => "shared memory",
            IpcClass::Semaphores => "semaphores",
            IpcClass::Summary => "global summary",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnId {
    // generic
    Key,
    Id,
    Owner,
    Perms,
    Cuid,
    Cgid,
    Uid,
    Gid,
    Ctime,
    // messages
    UsedBytes,
    Msgs,
    Send,
    Recv,
    Lspid,
    Lrpid,
    // shared memory
    Size,
    Nattch,
    Status,
    Attach,
    Detach,
    Command,
    Cpid,
    Lpid,
    // semaphores
    Nsems,
    Otime,
    // summary
    Resource,
    Description,
    Used,
    Limit,
    UsePercent,
}

impl ColumnId {
    /// Every column in declaration order.
    pub const ALL: [ColumnId; 30] = [
        ColumnId::Key,
        ColumnId::Id,
        ColumnId::Owner,
        ColumnId::Perms,
        ColumnId::Cuid,
        ColumnId::Cgid,
        ColumnId::Uid,
        ColumnId::Gid,
        ColumnId::Ctime,
        ColumnId::UsedBytes,
        ColumnId::Msgs,
        ColumnId::Send,
        ColumnId::Recv,
        ColumnId::Lspid,
        ColumnId::Lrpid,
        ColumnId::Size,
        ColumnId::Nattch,
        ColumnId::Status,
        ColumnId::Attach,
        ColumnId::Detach,
        ColumnId::Command,
        ColumnId::Cpid,
        ColumnId::Lpid,
        ColumnId::Nsems,
        ColumnId::Otime,
        ColumnId::Resource,
        ColumnId::Description,
        ColumnId::Used,
        ColumnId::Limit,
        ColumnId::UsePercent,
    ];

    pub fn desc(self) -> &'static ColumnDesc {
        &COLUMNS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.desc().name
    }

    /// Resolve a column name for the active class.
    ///
    /// Names match case-insensitively. A known name from another band is a
    /// distinct error from an unknown one.
    pub fn lookup(name: &str, active: IpcClass) -> Result<ColumnId, LsipcError> {
        let desc = COLUMNS
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LsipcError::UnknownColumn(name.to_string()))?;
        if !desc.applies_to(active) {
            return Err(LsipcError::ColumnNotApplicable {
                column: desc.name.to_string(),
                class: active,
            });
        }
        Ok(desc.id)
    }
}

/// Right-align cells.
const RIGHT: u8 = 1;
/// Cells may be cut to fit the terminal.
const TRUNC: u8 = 1 << 1;
/// Ignore unusually wide cells when sizing the column.
const NOEXTREMES: u8 = 1 << 2;

/// Static description of one column.
#[derive(Debug)]
pub struct ColumnDesc {
    pub id: ColumnId,
    /// Canonical uppercase name used by `--output`, export and JSON.
    pub name: &'static str,
    pub help: &'static str,
    /// Label of the pretty (`--id`) output.
    pub label: &'static str,
    pub width_hint: f64,
    flags: u8,
    /// `None` for the generic band.
    pub band: Option<IpcClass>,
}

impl ColumnDesc {
    const fn new(
        id: ColumnId,
        name: &'static str,
        help: &'static str,
        label: &'static str,
        width_hint: f64,
        flags: u8,
        band: Option<IpcClass>,
    ) -> Self {
        ColumnDesc {
            id,
            name,
            help,
            label,
            width_hint,
            flags,
            band,
        }
    }

    pub fn is_right(&self) -> bool {
        self.flags & RIGHT != 0
    }

    pub fn is_truncatable(&self) -> bool {
        self.flags & TRUNC != 0
    }

    pub fn is_no_extremes(&self) -> bool {
        self.flags & NOEXTREMES != 0
    }

    pub fn applies_to(&self, class: IpcClass) -> bool {
        self.band.map_or(true, |band| band == class)
    }

    /// Table column for this descriptor.
    pub fn to_column(&self) -> Column {
        let mut column = Column::new(self.name)
            .label(self.label)
            .width_hint(self.width_hint)
            .truncate(self.is_truncatable());
        if self.is_right() {
            column = column.right();
        }
        if self.is_no_extremes() {
            column = column.no_extremes();
        }
        column
    }
}

use ColumnId as C;
use IpcClass::{Messages, Semaphores, SharedMemory, Summary};

/// The registry, in [`ColumnId`] order.
#[rustfmt::skip]
pub static COLUMNS: [ColumnDesc; 30] = [
    ColumnDesc::new(C::Key, "KEY", "Resource key", "Key", 1.0, 0, None),
    ColumnDesc::new(C::Id, "ID", "Resource ID", "ID", 1.0, 0, None),
    ColumnDesc::new(C::Owner, "OWNER", "Owner", "Owner", 1.0, RIGHT, None),
    ColumnDesc::new(C::Perms, "PERMS", "Permissions", "Permissions", 1.0, RIGHT, None),
    ColumnDesc::new(C::Cuid, "CUID", "Creator UID", "CUID", 1.0, RIGHT, None),
    ColumnDesc::new(C::Cgid, "CGID", "Creator GID", "CGID", 1.0, RIGHT, None),
    ColumnDesc::new(C::Uid, "UID", "User ID", "UID", 1.0, RIGHT, None),
    ColumnDesc::new(C::Gid, "GID", "Group ID", "GID", 1.0, RIGHT, None),
    ColumnDesc::new(C::Ctime, "CTIME", "Time of the last change", "Last change", 1.0, RIGHT, None),
    ColumnDesc::new(C::UsedBytes, "USEDBYTES", "Bytes used", "Bytes used", 1.0, RIGHT, Some(Messages)),
    ColumnDesc::new(C::Msgs, "MSGS", "Number of messages", "Messages", 1.0, 0, Some(Messages)),
    ColumnDesc::new(C::Send, "SEND", "Time of last msg sent", "Msg sent", 1.0, RIGHT, Some(Messages)),
    ColumnDesc::new(C::Recv, "RECV", "Time of last msg received", "Msg received", 1.0, RIGHT, Some(Messages)),
    ColumnDesc::new(C::Lspid, "LSPID", "PID of the last msg sender", "Msg sender", 1.0, RIGHT, Some(Messages)),
    ColumnDesc::new(C::Lrpid, "LRPID", "PID of the last msg receiver", "Msg receiver", 1.0, RIGHT, Some(Messages)),
    ColumnDesc::new(C::Size, "SIZE", "Segment size", "Segment size", 1.0, RIGHT, Some(SharedMemory)),
    ColumnDesc::new(C::Nattch, "NATTCH", "Number of attached processes", "Attached processes", 1.0, RIGHT, Some(SharedMemory)),
    ColumnDesc::new(C::Status, "STATUS", "Status", "Status", 1.0, NOEXTREMES, Some(SharedMemory)),
    ColumnDesc::new(C::Attach, "ATTACH", "Attach time", "Attach time", 1.0, RIGHT, Some(SharedMemory)),
    ColumnDesc::new(C::Detach, "DETACH", "Detach time", "Detach time", 1.0, RIGHT, Some(SharedMemory)),
    ColumnDesc::new(C::Command, "COMMAND", "Creator command line", "Creator command", 0.0, TRUNC, Some(SharedMemory)),
    ColumnDesc::new(C::Cpid, "CPID", "PID of the creator", "Creator PID", 1.0, RIGHT, Some(SharedMemory)),
    ColumnDesc::new(C::Lpid, "LPID", "PID of last user", "Last user PID", 1.0, RIGHT, Some(SharedMemory)),
    ColumnDesc::new(C::Nsems, "NSEMS", "Number of semaphores", "Semaphores", 1.0, RIGHT, Some(Semaphores)),
    ColumnDesc::new(C::Otime, "OTIME", "Time of the last operation", "Last operation", 1.0, RIGHT, Some(Semaphores)),
    ColumnDesc::new(C::Resource, "RESOURCE", "Resource name", "Resource", 1.0, 0, Some(Summary)),
    ColumnDesc::new(C::Description, "DESCRIPTION", "Resource description", "Description", 1.0, 0, Some(Summary)),
    ColumnDesc::new(C::Used, "USED", "Currently used", "Used", 1.0, RIGHT, Some(Summary)),
    ColumnDesc::new(C::Limit, "LIMIT", "System-wide limit", "Limit", 1.0, RIGHT, Some(Summary)),
    ColumnDesc::new(C::UsePercent, "USE%", "Percentage used", "Use", 1.0, RIGHT, Some(Summary)),
];

/// Column listing appended to `--help`, one section per band.
pub fn help_text() -> String {
    let sections: [(&str, Option<IpcClass>); 5] = [
        ("Generic columns:", None),
        ("Shared memory columns (--shmems):", Some(SharedMemory)),
        ("Messages queues columns (--queues):", Some(Messages)),
        ("Semaphores columns (--semaphores):", Some(Semaphores)),
        ("Summary columns (--global):", Some(Summary)),
    ];

    let mut out = String::new();
    for (n, (title, band)) in sections.iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        out.push_str(title);
        out.push('\n');
        for desc in COLUMNS.iter().filter(|d| d.band == *band) {
            out.push_str(&format!(" {:>14}  {}\n", desc.name, desc.help));
        }
    }
    out
}
