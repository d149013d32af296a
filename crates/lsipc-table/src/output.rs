//! Output mode control.
//!
//! [`OutputMode`] selects the shape of the rendered table. [`RenderOptions`]
//! bundles it with the display toggles that apply to every mode.

/// Controls how a table is rendered.
///
/// The modes are mutually exclusive; choosing between them is the caller's
/// job (typically a group of CLI flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned human-readable columns
    #[default]
    Grid,
    /// Fields separated by one space, no alignment
    Raw,
    /// Fields joined with `:`
    Colon,
    /// One `NAME="value"` pair per line, blank line between rows
    Newline,
    /// Raw fields, records terminated by NUL instead of newline
    Nul,
    /// `NAME="value"` pairs, one row per line
    Export,
    /// Array of objects keyed by column name
    Json,
    /// Vertical `Label: value` listing for a single object
    Pretty,
}

impl OutputMode {
    /// Column separator for the flat, header-carrying modes.
    pub(crate) fn column_separator(&self) -> &'static str {
        match self {
            OutputMode::Colon => ":",
            _ => " ",
        }
    }

    /// Line terminator for the flat modes.
    pub(crate) fn line_terminator(&self) -> &'static str {
        match self {
            OutputMode::Nul => "\0",
            _ => "\n",
        }
    }
}

/// Mode plus the toggles that are independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: OutputMode,
    /// Print the header line (modes that have one).
    pub headings: bool,
    /// Allow the grid layout to truncate `truncate` columns.
    pub truncate: bool,
    /// Terminal width, `None` when output is not a terminal.
    pub term_width: Option<usize>,
}

impl RenderOptions {
    pub fn new(mode: OutputMode) -> Self {
        RenderOptions {
            mode,
            headings: true,
            truncate: true,
            term_width: None,
        }
    }

    pub fn headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }

    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn term_width(mut self, width: Option<usize>) -> Self {
        self.term_width = width;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(OutputMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_default_is_grid() {
        assert_eq!(OutputMode::default(), OutputMode::Grid);
    }

    #[test]
    fn test_separators() {
        assert_eq!(OutputMode::Colon.column_separator(), ":");
        assert_eq!(OutputMode::Raw.column_separator(), " ");
        assert_eq!(OutputMode::Nul.line_terminator(), "\0");
        assert_eq!(OutputMode::Raw.line_terminator(), "\n");
    }

    #[test]
    fn test_render_options_builder() {
        let opts = RenderOptions::new(OutputMode::Json)
            .headings(false)
            .truncate(false)
            .term_width(Some(80));
        assert_eq!(opts.mode, OutputMode::Json);
        assert!(!opts.headings);
        assert!(!opts.truncate);
        assert_eq!(opts.term_width, Some(80));
    }
}
