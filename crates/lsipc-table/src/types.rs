//! Core table types: columns, rows, detail blocks.

use crate::error::TableError;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// Configuration for a single column in a table.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Canonical column name, used for headers, export and JSON keys.
    pub name: String,
    /// Human label used by pretty rendering. Defaults to the name.
    pub label: String,
    /// Minimum grid width: cells when at least 1, a share of the terminal
    /// width below 1, nothing at 0.
    pub width_hint: f64,
    /// Text alignment within the column.
    pub align: Align,
    /// Whether the grid renderer may shorten this column to fit the terminal.
    pub truncate: bool,
    /// Ignore unusually wide cells when sizing this column.
    pub no_extremes: bool,
}

impl Column {
    /// Create a left-aligned column named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Column {
            label: name.clone(),
            name,
            width_hint: 1.0,
            align: Align::Left,
            truncate: false,
            no_extremes: false,
        }
    }

    /// Set the pretty-mode label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the width hint.
    pub fn width_hint(mut self, hint: f64) -> Self {
        self.width_hint = hint;
        self
    }

    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Allow truncation of this column in grid output.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Exclude outlier cells from width calculation.
    pub fn no_extremes(mut self) -> Self {
        self.no_extremes = true;
        self
    }
}

/// Fixed-width block appended below a row in pretty output.
///
/// Used for per-element breakdowns of an object, e.g. the members of a
/// semaphore set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detail {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Detail {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Detail {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
    }
}

/// One table line: a cell per column plus an optional detail block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
    detail: Option<Detail>,
}

impl Row {
    fn with_columns(n: usize) -> Self {
        Row {
            cells: vec![None; n],
            detail: None,
        }
    }

    /// Set the cell at column position `index`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), TableError> {
        let columns = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TableError::NoSuchCell { index, columns })?;
        *cell = Some(value.into());
        Ok(())
    }

    /// Cell content, `None` when the cell was never set.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Cell content with unset cells rendered as the empty string.
    pub fn text(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    pub fn set_detail(&mut self, detail: Detail) {
        self.detail = Some(detail);
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }
}

/// An ordered set of columns and the rows filled against them.
#[derive(Clone, Debug, Default)]
pub struct Table {
    name: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used as the top-level JSON key.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append a column. Columns must be added before rows.
    pub fn add_column(&mut self, column: Column) {
        debug_assert!(self.rows.is_empty(), "columns added after rows");
        self.columns.push(column);
    }

    /// Append an empty row with one unset cell per column.
    pub fn new_row(&mut self) -> &mut Row {
        self.rows.push(Row::with_columns(self.columns.len()));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let col = Column::new("SIZE").label("Segment size").right().truncate(true);
        assert_eq!(col.name, "SIZE");
        assert_eq!(col.label, "Segment size");
        assert_eq!(col.align, Align::Right);
        assert!(col.truncate);
        assert!(!col.no_extremes);
    }

    #[test]
    fn test_label_defaults_to_name() {
        assert_eq!(Column::new("KEY").label, "KEY");
    }

    #[test]
    fn test_new_row_has_unset_cells() {
        let mut table = Table::new();
        table.add_column(Column::new("A"));
        table.add_column(Column::new("B"));
        let row = table.new_row();
        assert_eq!(row.cells().len(), 2);
        assert_eq!(row.get(0), None);
        assert_eq!(row.text(1), "");
    }

    #[test]
    fn test_set_out_of_range() {
        let mut table = Table::new();
        table.add_column(Column::new("A"));
        let err = table.new_row().set(1, "x").unwrap_err();
        assert!(matches!(err, TableError::NoSuchCell { index: 1, columns: 1 }));
    }

    #[test]
    fn test_empty_string_is_set() {
        let mut table = Table::new();
        table.add_column(Column::new("STATUS"));
        let row = table.new_row();
        row.set(0, "").unwrap();
        assert_eq!(row.get(0), Some(""));
    }

    #[test]
    fn test_detail_rows() {
        let mut detail = Detail::new(["semnum", "value"]);
        detail.push_row([0, 1]);
        assert_eq!(detail.rows, vec![vec!["0".to_string(), "1".to_string()]]);
    }
}
