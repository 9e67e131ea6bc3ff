//! Folding range generation for Liftoscript documents
//!
//! A heading folds from its own line to the line before the next heading of
//! the same or shallower level, or to the end of the document.

use super::scanner::{LineType, StructuralScanner};
use crate::document::Document;

/// Inclusive, zero-based line range that an editor may collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoldingRange {
    pub start_line: usize,
    pub end_line: usize,
}

impl FoldingRange {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }
}

/// Analyzer for generating folding ranges
pub struct FoldingAnalyzer;

impl FoldingAnalyzer {
    /// Generate folding ranges for the entire document
    pub fn generate_ranges(text: &str) -> Vec<FoldingRange> {
        Self::ranges_for(&Document::parse(text))
    }

    /// Generate folding ranges for an already split document
    ///
    /// Ranges are returned in the order their headings are closed.
    pub fn ranges_for(document: &Document<'_>) -> Vec<FoldingRange> {
        let mut ranges = Vec::new();
        let mut header_stack: Vec<(usize, usize)> = Vec::new(); // (start_line, level)

        for line in document.lines() {
            let LineType::Heading(level) = StructuralScanner::scan(line) else {
                continue;
            };
            let i = line.index();

            // Close any headers at this level or deeper
            while let Some(&(start_line, stack_level)) = header_stack.last() {
                if stack_level < level {
                    break;
                }
                header_stack.pop();
                // Only fold if there's content between start and current line
                if start_line + 1 < i {
                    ranges.push(FoldingRange::new(start_line, i - 1));
                }
            }
            header_stack.push((i, level));
        }

        // Trailing headers run to the last line, inclusive
        let last_line = document.last_index();
        while let Some((start_line, _)) = header_stack.pop() {
            if start_line < last_line {
                ranges.push(FoldingRange::new(start_line, last_line));
            }
        }

        ranges
    }
}
