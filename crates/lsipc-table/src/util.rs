//! Unicode-aware width, padding and truncation helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
///
/// Wide characters (CJK) count as two columns, zero-width characters as none.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pad `s` on the left to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.extend(std::iter::repeat(' ').take(pad));
    out.push_str(s);
    out
}

/// Pad `s` on the right to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Shorten a grid cell to `max_width` terminal columns.
///
/// Cells that fit are kept as they are; longer ones lose their tail and end
/// in `…`, which takes one of the columns. Wide characters are never split.
///
/// ```
/// use lsipc_table::truncate_to_width;
///
/// assert_eq!(truncate_to_width("postgres", 8), "postgres");
/// assert_eq!(truncate_to_width("postgres -D /data", 9), "postgres…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width - 1;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Escape blanks, control characters and backslashes as `\xHH`.
///
/// Raw-style outputs rely on whitespace as a field separator, so a cell must
/// never contain any.
pub(crate) fn escape_blanks(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_whitespace() || c.is_control() || c == '\\' {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("\\x{:02x}", b));
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Quote a value for `NAME="value"` shell assignments.
pub(crate) fn shell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Make a column name usable as a shell variable name.
pub(crate) fn shell_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_right("7", 3), "7  ");
        assert_eq!(pad_left("toolong", 3), "toolong");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("/usr/bin/Xorg", 6), "/usr/…");
        assert_eq!(truncate_to_width("dest", 4), "dest");
        assert_eq!(truncate_to_width("dest", 1), "…");
        assert_eq!(truncate_to_width("dest", 0), "");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_escape_blanks() {
        assert_eq!(escape_blanks("a b"), "a\\x20b");
        assert_eq!(escape_blanks("x\ty"), "x\\x09y");
        assert_eq!(escape_blanks("c:\\d"), "c:\\x5cd");
        assert_eq!(escape_blanks("plain"), "plain");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("abc"), "\"abc\"");
        assert_eq!(shell_quote("a\"b$c"), "\"a\\\"b\\$c\"");
        assert_eq!(shell_quote(""), "\"\"");
    }

    #[test]
    fn test_shell_name() {
        assert_eq!(shell_name("USE%"), "USE_");
        assert_eq!(shell_name("KEY"), "KEY");
    }
}
