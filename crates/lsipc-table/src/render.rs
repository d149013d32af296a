//! Rendering of a filled [`Table`] in every [`OutputMode`].

use std::io::Write;

use crate::error::TableError;
use crate::output::{OutputMode, RenderOptions};
use crate::serialize::to_json;
use crate::types::{Align, Detail, Row, Table};
use crate::util::{
    display_width, escape_blanks, pad_left, pad_right, shell_name, shell_quote, truncate_to_width,
};

/// Column at which pretty-mode values start.
const PRETTY_VALUE_COLUMN: usize = 36;

/// Field width of the detail block.
const DETAIL_CELL_WIDTH: usize = 10;

/// Render `table` to `out` according to `opts`.
pub fn render<W: Write>(table: &Table, opts: &RenderOptions, out: &mut W) -> Result<(), TableError> {
    match opts.mode {
        OutputMode::Grid => render_grid(table, opts, out),
        OutputMode::Raw | OutputMode::Colon | OutputMode::Nul => render_flat(table, opts, out),
        OutputMode::Export => render_export(table, out),
        OutputMode::Newline => render_newline(table, out),
        OutputMode::Json => {
            let json = to_json(table)?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
        OutputMode::Pretty => render_pretty(table, out),
    }
}

/// Render into a `String`.
pub fn render_to_string(table: &Table, opts: &RenderOptions) -> Result<String, TableError> {
    let mut buf = Vec::new();
    render(table, opts, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn render_grid<W: Write>(table: &Table, opts: &RenderOptions, out: &mut W) -> Result<(), TableError> {
    let widths = table.resolve_widths(opts);
    let columns = table.columns();

    let format_line = |cells: Vec<&str>| -> String {
        let last = cells.len().saturating_sub(1);
        let mut line = String::new();
        for (i, (cell, col)) in cells.into_iter().zip(columns).enumerate() {
            let width = widths.get(i).unwrap_or(0);
            let text = if opts.truncate && col.truncate && display_width(cell) > width {
                truncate_to_width(cell, width)
            } else {
                cell.to_string()
            };
            if i > 0 {
                line.push(' ');
            }
            match col.align {
                Align::Right => line.push_str(&pad_left(&text, width)),
                Align::Left if i == last => line.push_str(&text),
                Align::Left => line.push_str(&pad_right(&text, width)),
            }
        }
        line
    };

    if opts.headings && !columns.is_empty() {
        let header = format_line(columns.iter().map(|c| c.name.as_str()).collect());
        writeln!(out, "{}", header)?;
    }
    for row in table.rows() {
        let line = format_line((0..columns.len()).map(|i| row.text(i)).collect());
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render_flat<W: Write>(table: &Table, opts: &RenderOptions, out: &mut W) -> Result<(), TableError> {
    let sep = opts.mode.column_separator();
    let term = opts.mode.line_terminator();
    let columns = table.columns();

    if opts.headings && !columns.is_empty() {
        let names: Vec<String> = columns.iter().map(|c| escape_blanks(&c.name)).collect();
        write!(out, "{}{}", names.join(sep), term)?;
    }
    for row in table.rows() {
        let cells: Vec<String> = (0..columns.len())
            .map(|i| escape_blanks(row.text(i)))
            .collect();
        write!(out, "{}{}", cells.join(sep), term)?;
    }
    Ok(())
}

fn export_pairs(table: &Table, row: &Row) -> Vec<String> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{}={}", shell_name(&col.name), shell_quote(row.text(i))))
        .collect()
}

fn render_export<W: Write>(table: &Table, out: &mut W) -> Result<(), TableError> {
    for row in table.rows() {
        writeln!(out, "{}", export_pairs(table, row).join(" "))?;
    }
    Ok(())
}

fn render_newline<W: Write>(table: &Table, out: &mut W) -> Result<(), TableError> {
    for (n, row) in table.rows().iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        for pair in export_pairs(table, row) {
            writeln!(out, "{}", pair)?;
        }
    }
    Ok(())
}

fn render_pretty<W: Write>(table: &Table, out: &mut W) -> Result<(), TableError> {
    for row in table.rows() {
        for (i, col) in table.columns().iter().enumerate() {
            let Some(value) = row.get(i) else {
                continue;
            };
            let label = format!("{}:", col.label);
            let pad = PRETTY_VALUE_COLUMN.saturating_sub(display_width(&label)).max(1);
            let line = format!("{}{}{}", label, " ".repeat(pad), value);
            writeln!(out, "{}", line.trim_end())?;
        }
        if let Some(detail) = row.detail() {
            render_detail(detail, out)?;
        }
    }
    Ok(())
}

fn render_detail<W: Write>(detail: &Detail, out: &mut W) -> Result<(), TableError> {
    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .map(|c| pad_right(c, DETAIL_CELL_WIDTH))
            .collect();
        padded.join(" ").trim_end().to_string()
    };
    writeln!(out, "{}", line(&detail.header))?;
    for row in &detail.rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}
