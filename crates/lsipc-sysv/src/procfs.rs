//! Parsers for the `/proc/sysvipc/{msg,shm,sem}` tables.
//!
//! Each file is a header line of column names followed by one
//! whitespace-separated line per object. Values are located by header name,
//! so kernels that append columns (`rss`, `swap`) parse unchanged.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, SysvError};
use crate::types::{IpcPerm, MsgQueue, SemSet, ShmSegment};

/// One data line of a procfs table, addressed by column name.
pub(crate) struct Fields<'a> {
    path: &'a Path,
    line: usize,
    header: &'a [&'a str],
    values: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    fn raw(&self, name: &str) -> Result<&'a str> {
        self.header
            .iter()
            .position(|h| *h == name)
            .and_then(|i| self.values.get(i).copied())
            .ok_or_else(|| self.error(format!("missing field '{}'", name)))
    }

    pub(crate) fn get<T: FromStr>(&self, name: &str) -> Result<T> {
        let raw = self.raw(name)?;
        raw.parse()
            .map_err(|_| self.error(format!("invalid {} value '{}'", name, raw)))
    }

    pub(crate) fn octal(&self, name: &str) -> Result<u32> {
        let raw = self.raw(name)?;
        u32::from_str_radix(raw, 8)
            .map_err(|_| self.error(format!("invalid octal {} value '{}'", name, raw)))
    }

    fn error(&self, reason: String) -> SysvError {
        SysvError::Parse {
            path: self.path.to_path_buf(),
            line: self.line,
            reason,
        }
    }
}

/// Read `path` and convert every data line with `convert`.
pub(crate) fn read_table<T>(path: &Path, convert: impl Fn(&Fields) -> Result<T>) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|source| SysvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(path, &content, convert)
}

pub(crate) fn parse_table<T>(
    path: &Path,
    content: &str,
    convert: impl Fn(&Fields) -> Result<T>,
) -> Result<Vec<T>> {
    let mut lines = content.lines().enumerate();
    let header: Vec<&str> = match lines.next() {
        Some((_, line)) => line.split_whitespace().collect(),
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = Fields {
            path,
            line: idx + 1,
            header: &header,
            values: line.split_whitespace().collect(),
        };
        records.push(convert(&fields)?);
    }
    Ok(records)
}

fn perm(f: &Fields, id_field: &str) -> Result<IpcPerm> {
    Ok(IpcPerm {
        key: f.get("key")?,
        id: f.get(id_field)?,
        uid: f.get("uid")?,
        gid: f.get("gid")?,
        cuid: f.get("cuid")?,
        cgid: f.get("cgid")?,
        mode: f.octal("perms")?,
    })
}

pub(crate) fn msg(f: &Fields) -> Result<MsgQueue> {
    Ok(MsgQueue {
        perm: perm(f, "msqid")?,
        cbytes: f.get("cbytes")?,
        qnum: f.get("qnum")?,
        lspid: f.get("lspid")?,
        lrpid: f.get("lrpid")?,
        stime: f.get("stime")?,
        rtime: f.get("rtime")?,
        ctime: f.get("ctime")?,
    })
}

pub(crate) fn shm(f: &Fields) -> Result<ShmSegment> {
    Ok(ShmSegment {
        perm: perm(f, "shmid")?,
        size: f.get("size")?,
        cpid: f.get("cpid")?,
        lpid: f.get("lpid")?,
        nattch: f.get("nattch")?,
        atime: f.get("atime")?,
        dtime: f.get("dtime")?,
        ctime: f.get("ctime")?,
    })
}

pub(crate) fn sem(f: &Fields) -> Result<SemSet> {
    Ok(SemSet {
        perm: perm(f, "semid")?,
        nsems: f.get("nsems")?,
        otime: f.get("otime")?,
        ctime: f.get("ctime")?,
    })
}

pub(crate) fn sysvipc_path(root: &Path, name: &str) -> PathBuf {
    root.join("sysvipc").join(name)
}
