//! Source formatter for Liftoscript documents
//!
//! Indentation follows the heading hierarchy:
//! - `#` headings are flush left and end subheading context
//! - `##` (and deeper) headings get one indent unit
//! - body lines after a subheading get two units, otherwise none
//!
//! Lines inside a multi-line `{~ ... ~}` block are embedded code and get one
//! extra unit per open brace on top of the body indent. Outside of block
//! payloads, spacing around `/` is normalized to `" / "`.
//!
//! An unterminated block keeps formatting lines as code until the end of
//! the document.

pub mod block;
pub mod slash;
pub mod state;

pub use block::{BlockMarkers, BLOCK_CLOSE, BLOCK_OPEN};
pub use slash::normalize_slashes;
pub use state::ScanState;

use crate::document::{Document, Line};
use crate::structural::scanner::{LineType, StructuralScanner, COMMENT_MARKER};

/// Formatter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indent unit
    pub indent_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Line-oriented formatter
#[derive(Debug, Clone)]
pub struct Formatter {
    /// One indent unit
    unit: String,
    /// Body indent under a subheading (two units)
    body: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        let unit = " ".repeat(options.indent_width);
        let body = unit.repeat(2);
        Self { unit, body }
    }

    /// Format a complete document, returning the replacement text
    ///
    /// Lines are joined with `\n` regardless of the input terminators.
    pub fn format(&self, text: &str) -> String {
        let document = Document::parse(text);
        let mut state = ScanState::new();

        document
            .lines()
            .iter()
            .map(|line| self.format_line(&mut state, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format one line, advancing `state`
    pub fn format_line(&self, state: &mut ScanState, line: &Line<'_>) -> String {
        let trimmed = line.trimmed();
        let line_type = StructuralScanner::scan(line);

        match line_type {
            LineType::Blank => return String::new(),
            LineType::Heading(_) if line_type.is_subheading() => {
                state.inside_subheading = true;
                return format!("{}{}", self.unit, trimmed);
            }
            LineType::Heading(_) => {
                state.inside_subheading = false;
                return trimmed.to_string();
            }
            LineType::Comment | LineType::Other => {}
        }

        let base = if state.inside_subheading {
            self.body.as_str()
        } else {
            ""
        };

        if state.in_custom_block {
            return self.format_code_line(state, base, trimmed);
        }

        match BlockMarkers::split(trimmed) {
            BlockMarkers::SingleLine {
                before,
                block,
                after,
            } => {
                let mut out = String::from(base);
                if !before.is_empty() {
                    out.push_str(&normalize_slashes(before));
                    out.push(' ');
                }
                out.push_str(block);
                if !after.is_empty() {
                    out.push(' ');
                    out.push_str(after);
                }
                out
            }
            BlockMarkers::Open { before, marker } => {
                state.enter_block();
                if before.is_empty() {
                    format!("{base}{marker}")
                } else {
                    format!("{base}{} {marker}", normalize_slashes(before))
                }
            }
            BlockMarkers::None if line_type == LineType::Comment => format!("{base}{trimmed}"),
            BlockMarkers::None => format!("{base}{}", normalize_slashes(trimmed)),
        }
    }

    /// Lines between `{~` and `~}`
    fn format_code_line(&self, state: &mut ScanState, base: &str, trimmed: &str) -> String {
        if trimmed.contains(BLOCK_CLOSE) {
            state.exit_block();
            return format!("{base}{trimmed}");
        }

        if trimmed.starts_with(COMMENT_MARKER) {
            return format!("{base}{trimmed}");
        }

        if trimmed.starts_with('}') {
            state.dedent();
        }
        let nested = self.unit.repeat(state.code_depth + 1);
        let out = format!("{base}{nested}{trimmed}");

        if trimmed.ends_with('{') && !trimmed.contains('}') {
            state.indent();
        }
        out
    }
}

/// Format a document with the default 4-space indent unit
pub fn format_document(text: &str) -> String {
    Formatter::default().format(text)
}
