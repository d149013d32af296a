//! Generic column/row tables and their textual renderings.
//!
//! A [`Table`] owns an ordered list of [`Column`]s and an ordered list of
//! [`Row`]s. Every row carries one cell per column; a cell is either unset or
//! holds an already formatted string. A row may also carry a [`Detail`]
//! block, a small fixed-width sub-table printed after the row in
//! [`OutputMode::Pretty`].
//!
//! The table knows nothing about where its data comes from. Rendering is a
//! single call:
//!
//! ```rust
//! use lsipc_table::{render_to_string, Column, OutputMode, RenderOptions, Table};
//!
//! let mut table = Table::new();
//! table.add_column(Column::new("KEY"));
//! table.add_column(Column::new("SIZE").right());
//!
//! let row = table.new_row();
//! row.set(0, "0x00000000").unwrap();
//! row.set(1, "4K").unwrap();
//!
//! let out = render_to_string(&table, &RenderOptions::new(OutputMode::Raw)).unwrap();
//! assert_eq!(out, "KEY SIZE\n0x00000000 4K\n");
//! ```
//!
//! ## Output modes
//!
//! | Mode | Shape |
//! |------|-------|
//! | `Grid` | aligned columns, optional header, truncation to the terminal |
//! | `Raw` | space separated, escaped cells |
//! | `Colon` | `:` separated |
//! | `Nul` | like raw, records terminated by NUL |
//! | `Export` | `NAME="value"` pairs |
//! | `Newline` | one `NAME="value"` pair per line |
//! | `Json` | array of objects keyed by column name |
//! | `Pretty` | vertical `Label: value` listing plus detail block |

mod error;
mod output;
mod render;
mod resolve;
mod serialize;
mod types;
mod util;

pub use error::TableError;
pub use output::{OutputMode, RenderOptions};
pub use render::{render, render_to_string};
pub use resolve::ResolvedWidths;
pub use serialize::to_json;
pub use types::{Align, Column, Detail, Row, Table};
pub use util::{display_width, pad_left, pad_right, truncate_to_width};
