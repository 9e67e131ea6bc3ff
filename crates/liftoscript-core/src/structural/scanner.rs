//! Line-by-line structural scanner for Liftoscript documents
//!
//! Classifies each line's structural role for formatting and folding.
//! Custom-block markers are context dependent and are left to the formatter.

use crate::document::Line;

/// Marker that starts a line comment
pub const COMMENT_MARKER: &str = "//";

/// Classification of a line's structural role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Only whitespace
    Blank,
    /// Heading with its `#` count
    Heading(usize),
    /// Line comment (`// ...`)
    Comment,
    /// Anything else (exercises, code, text)
    Other,
}

impl LineType {
    /// Level 2 or deeper
    pub fn is_subheading(self) -> bool {
        matches!(self, LineType::Heading(level) if level >= 2)
    }
}

/// Structural scanner for Liftoscript lines
pub struct StructuralScanner;

impl StructuralScanner {
    /// Analyze a single line to determine its structural type
    pub fn scan(line: &Line<'_>) -> LineType {
        if line.is_blank() {
            return LineType::Blank;
        }

        // Headings win over everything else, even inside custom blocks
        if let Some(level) = line.heading_level() {
            return LineType::Heading(level);
        }

        if line.trimmed().starts_with(COMMENT_MARKER) {
            return LineType::Comment;
        }

        LineType::Other
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn scan(text: &str) -> LineType {
        StructuralScanner::scan(&Line::new(0, text))
    }

    #[test]
    fn test_scan_classifies_lines() {
        assert_eq!(scan("   "), LineType::Blank);
        assert_eq!(scan("# Week 1"), LineType::Heading(1));
        assert_eq!(scan("  ## Day 1"), LineType::Heading(2));
        assert_eq!(scan("// warmup"), LineType::Comment);
        assert_eq!(scan("Squat / 3x5"), LineType::Other);
    }

    #[test]
    fn test_subheading() {
        assert!(LineType::Heading(2).is_subheading());
        assert!(LineType::Heading(4).is_subheading());
        assert!(!LineType::Heading(1).is_subheading());
        assert!(!LineType::Other.is_subheading());
    }
}
