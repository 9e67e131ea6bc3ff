//! Line model for Liftoscript documents
//!
//! A document is its raw text split on line terminators. CRLF and LF are
//! equivalent, and a trailing terminator yields a final empty line so that
//! line indices match what an editor shows.

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    index: usize,
    raw: &'a str,
    trimmed: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line from its zero-based index and raw content (without terminator)
    pub fn new(index: usize, raw: &'a str) -> Self {
        Self {
            index,
            raw,
            trimmed: raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK),
        }
    }

    /// Zero-based line index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Original content, terminator removed
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Content with surrounding whitespace and any byte-order mark stripped
    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Number of leading `#` characters, if the line is a heading
    pub fn heading_level(&self) -> Option<usize> {
        let level = self.trimmed.len() - self.trimmed.trim_start_matches('#').len();
        (level > 0).then_some(level)
    }
}

/// An ordered sequence of lines borrowed from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> Document<'a> {
    /// Split text into lines, accepting both `\n` and `\r\n`
    pub fn parse(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .enumerate()
            .map(|(index, raw)| Line::new(index, raw.strip_suffix('\r').unwrap_or(raw)))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Number of lines; never zero, empty text is one empty line
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the final line
    pub fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}
