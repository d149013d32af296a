//! Building the ordered list of columns to print.

use crate::columns::{ColumnId, IpcClass};
use crate::error::LsipcError;

/// Most columns a run may select, duplicates included.
pub const MAX_COLUMNS: usize = 2 * ColumnId::ALL.len();

/// Ordered column ids, validated against the active class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ColumnId>,
}

impl Selection {
    /// Parse a comma separated list of column names.
    ///
    /// Order and duplicates are kept. The first invalid name fails the whole
    /// list.
    pub fn parse(list: &str, active: IpcClass) -> Result<Selection, LsipcError> {
        let mut selection = Selection::default();
        for name in list.split(',') {
            selection.push(ColumnId::lookup(name, active)?)?;
        }
        Ok(selection)
    }

    /// The columns printed when none are requested.
    pub fn defaults(active: IpcClass, creator: bool, time: bool) -> Selection {
        use ColumnId::*;

        if active == IpcClass::Summary {
            return Selection::from_ids(&[Resource, Description, Used, Limit]);
        }

        let mut ids = vec![Key, Id, Perms, Owner];
        if creator {
            ids.extend([Cuid, Cgid, Uid, Gid]);
        }
        match active {
            IpcClass::Messages => {
                ids.extend([UsedBytes, Msgs]);
                if time {
                    ids.extend([Send, Recv, Ctime]);
                }
                ids.extend([Lspid, Lrpid]);
            }
            IpcClass::SharedMemory => {
                ids.extend([Size, Nattch, Status]);
                if time {
                    ids.extend([Attach, Detach]);
                }
                ids.extend([Ctime, Cpid, Lpid, Command]);
            }
            IpcClass::Semaphores => {
                ids.push(Nsems);
                if time {
                    ids.extend([Otime, Ctime]);
                }
            }
            IpcClass::Summary => {}
        }
        Selection { ids }
    }

    /// Every column legal for `active`, in declaration order.
    pub fn every_column(active: IpcClass) -> Selection {
        Selection {
            ids: ColumnId::ALL
                .into_iter()
                .filter(|id| id.desc().applies_to(active))
                .collect(),
        }
    }

    fn from_ids(ids: &[ColumnId]) -> Selection {
        Selection { ids: ids.to_vec() }
    }

    fn push(&mut self, id: ColumnId) -> Result<(), LsipcError> {
        if self.ids.len() >= MAX_COLUMNS {
            return Err(LsipcError::TooManyColumns { limit: MAX_COLUMNS });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn ids(&self) -> &[ColumnId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Canonical names, for diagnostics.
    pub fn names(&self) -> Vec<&'static str> {
        self.ids.iter().map(|id| id.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RESOURCES: [IpcClass; 3] = [
        IpcClass::Messages,
        IpcClass::SharedMemory,
        IpcClass::Semaphores,
    ];

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let sel = Selection::parse("id,KEY,Id", IpcClass::Semaphores).unwrap();
        assert_eq!(sel.ids(), &[ColumnId::Id, ColumnId::Key, ColumnId::Id]);
    }

    #[test]
    fn test_parse_rejects_empty_item() {
        assert!(matches!(
            Selection::parse("KEY,,ID", IpcClass::Messages),
            Err(LsipcError::UnknownColumn(name)) if name.is_empty()
        ));
        assert!(Selection::parse("KEY,", IpcClass::Messages).is_err());
    }

    #[test]
    fn test_parse_reports_first_bad_name() {
        let err = Selection::parse("KEY,NSEMS,BOGUS", IpcClass::Messages).unwrap_err();
        assert!(matches!(err, LsipcError::ColumnNotApplicable { ref column, .. } if column == "NSEMS"));
    }

    #[test]
    fn test_capacity() {
        let fits = vec!["KEY"; MAX_COLUMNS].join(",");
        assert_eq!(
            Selection::parse(&fits, IpcClass::Messages).unwrap().len(),
            MAX_COLUMNS
        );

        let over = vec!["KEY"; MAX_COLUMNS + 1].join(",");
        assert!(matches!(
            Selection::parse(&over, IpcClass::Messages),
            Err(LsipcError::TooManyColumns { limit }) if limit == MAX_COLUMNS
        ));
    }

    #[test]
    fn test_message_defaults() {
        assert_eq!(
            Selection::defaults(IpcClass::Messages, false, false).names(),
            vec!["KEY", "ID", "PERMS", "OWNER", "USEDBYTES", "MSGS", "LSPID", "LRPID"]
        );
        assert_eq!(
            Selection::defaults(IpcClass::Messages, true, true).names(),
            vec![
                "KEY", "ID", "PERMS", "OWNER", "CUID", "CGID", "UID", "GID", "USEDBYTES",
                "MSGS", "SEND", "RECV", "CTIME", "LSPID", "LRPID"
            ]
        );
    }

    #[test]
    fn test_shm_defaults() {
        assert_eq!(
            Selection::defaults(IpcClass::SharedMemory, false, true).names(),
            vec![
                "KEY", "ID", "PERMS", "OWNER", "SIZE", "NATTCH", "STATUS", "ATTACH", "DETACH",
                "CTIME", "CPID", "LPID", "COMMAND"
            ]
        );
    }

    #[test]
    fn test_sem_and_summary_defaults() {
        assert_eq!(
            Selection::defaults(IpcClass::Semaphores, false, false).names(),
            vec!["KEY", "ID", "PERMS", "OWNER", "NSEMS"]
        );
        assert_eq!(
            Selection::defaults(IpcClass::Summary, true, true).names(),
            vec!["RESOURCE", "DESCRIPTION", "USED", "LIMIT"]
        );
    }

    #[test]
    fn test_every_column_stays_in_band() {
        let sel = Selection::every_column(IpcClass::Semaphores);
        assert_eq!(
            sel.names(),
            vec!["KEY", "ID", "OWNER", "PERMS", "CUID", "CGID", "UID", "GID", "CTIME", "NSEMS", "OTIME"]
        );
        for class in RESOURCES {
            let sel = Selection::every_column(class);
            assert!(sel.ids().iter().all(|id| id.desc().applies_to(class)));
        }
    }

    fn is_subsequence(short: &[ColumnId], long: &[ColumnId]) -> bool {
        let mut rest = long.iter();
        short.iter().all(|id| rest.any(|other| other == id))
    }

    proptest! {
        #[test]
        fn prop_parse_preserves_input_order(
            class_idx in 0..3usize,
            picks in prop::collection::vec(0..ColumnId::ALL.len(), 1..20),
        ) {
            let class = RESOURCES[class_idx];
            let legal: Vec<ColumnId> = Selection::every_column(class).ids().to_vec();
            let wanted: Vec<ColumnId> = picks.iter().map(|n| legal[n % legal.len()]).collect();
            let list = wanted.iter().map(|id| id.name().to_lowercase()).collect::<Vec<_>>().join(",");

            let sel = Selection::parse(&list, class).unwrap();
            prop_assert_eq!(sel.ids(), wanted.as_slice());
        }

        #[test]
        fn prop_flags_only_append(class_idx in 0..3usize, creator: bool, time: bool) {
            let class = RESOURCES[class_idx];
            let base = Selection::defaults(class, false, false);
            let more = Selection::defaults(class, creator, time);
            prop_assert!(is_subsequence(base.ids(), more.ids()));
            prop_assert_eq!(Selection::defaults(class, creator, time), more);
        }
    }
}
