//! Width resolution for the grid layout.
//!
//! Column widths come from the data: the widest cell (or header) of each
//! column. `no_extremes` columns ignore outliers, and `truncate` columns give
//! up space when the table would not fit the terminal. A column's
//! `width_hint` sets its minimum: at least 1 is a width in cells, below 1 a
//! share of the terminal width.

use crate::output::RenderOptions;
use crate::types::Table;
use crate::util::display_width;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width including one separator column between neighbours.
    pub fn total(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len().saturating_sub(1)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl Table {
    /// Resolve grid column widths for `opts`.
    pub fn resolve_widths(&self, opts: &RenderOptions) -> ResolvedWidths {
        let mut widths = Vec::with_capacity(self.columns().len());
        let mut floors = Vec::with_capacity(self.columns().len());

        for (i, col) in self.columns().iter().enumerate() {
            let header_w = if opts.headings {
                display_width(&col.name)
            } else {
                0
            };
            let cells: Vec<usize> = self
                .rows()
                .iter()
                .map(|row| display_width(row.text(i)))
                .collect();

            let data_w = if col.no_extremes {
                widest_typical(&cells)
            } else {
                cells.iter().copied().max().unwrap_or(0)
            };

            let hint_w = hint_width(col.width_hint, opts.term_width);
            widths.push(header_w.max(data_w).max(hint_w));
            floors.push(header_w.max(hint_w).max(1));
        }

        let mut resolved = ResolvedWidths { widths };

        if let (true, Some(term_width)) = (opts.truncate, opts.term_width) {
            let mut excess = resolved.total().saturating_sub(term_width);
            // Shrink truncatable columns, rightmost first
            for (i, col) in self.columns().iter().enumerate().rev() {
                if excess == 0 {
                    break;
                }
                if !col.truncate {
                    continue;
                }
                let reducible = resolved.widths[i].saturating_sub(floors[i]);
                let cut = reducible.min(excess);
                resolved.widths[i] -= cut;
                excess -= cut;
            }
        }

        resolved
    }
}

fn hint_width(hint: f64, term_width: Option<usize>) -> usize {
    if hint >= 1.0 {
        hint as usize
    } else if hint > 0.0 {
        term_width.map_or(0, |w| (w as f64 * hint) as usize)
    } else {
        0
    }
}

/// Widest cell that is no more than twice the average width.
fn widest_typical(cells: &[usize]) -> usize {
    if cells.is_empty() {
        return 0;
    }
    let n = cells.len();
    let sum: usize = cells.iter().sum();
    cells
        .iter()
        .copied()
        .filter(|w| w * n <= 2 * sum)
        .max()
        .unwrap_or(0)
}
