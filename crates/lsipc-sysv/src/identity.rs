//! User and group name resolution.

use nix::unistd::{Gid, Group, Uid, User};

/// Resolves numeric ids to names.
///
/// `None` means the id has no entry; callers print the number instead.
pub trait Directory {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Looks names up in the system passwd and group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDirectory;

impl Directory for SystemDirectory {
    fn user_name(&self, uid: u32) -> Option<String> {
        match User::from_uid(Uid::from_raw(uid)) {
            Ok(user) => user.map(|u| u.name),
            Err(err) => {
                log::debug!("getpwuid({}) failed: {}", uid, err);
                None
            }
        }
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        match Group::from_gid(Gid::from_raw(gid)) {
            Ok(group) => group.map(|g| g.name),
            Err(err) => {
                log::debug!("getgrgid({}) failed: {}", gid, err);
                None
            }
        }
    }
}
