//! JSON serialization of tables.
//!
//! Rows serialize as objects keyed by column name in column order. Keys are
//! written through `serialize_map`, so duplicate columns survive as
//! duplicate keys instead of being folded by an intermediate map.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::TableError;
use crate::types::{Row, Table};

struct JsonRow<'a> {
    table: &'a Table,
    row: &'a Row,
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.table.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (i, col) in columns.iter().enumerate() {
            map.serialize_entry(&col.name, &self.row.get(i))?;
        }
        map.end()
    }
}

struct JsonRows<'a>(&'a Table);

impl Serialize for JsonRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = self.0;
        let mut seq = serializer.serialize_seq(Some(table.rows().len()))?;
        for row in table.rows() {
            seq.serialize_element(&JsonRow { table, row })?;
        }
        seq.end()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, &JsonRows(self))?;
                map.end()
            }
            None => JsonRows(self).serialize(serializer),
        }
    }
}

/// Serializes a table to pretty-printed JSON.
pub fn to_json(table: &Table) -> Result<String, TableError> {
    Ok(serde_json::to_string_pretty(table)?)
}
