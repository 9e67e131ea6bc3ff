//! liftoscript-core - Formatting and folding for Liftoscript documents
//!
//! This library provides the two text algorithms behind the Liftoscript
//! editor support:
//! - Formatter: re-indents a document by heading depth and normalizes
//!   embedded `{~ ... ~}` code blocks by brace nesting
//! - Folding ranges: collapsible regions derived from `#` heading nesting
//!
//! Both operate on a complete document snapshot and never fail.
//!
//! # Example
//!
//! ```
//! use liftoscript_core::{format_document, FoldingAnalyzer, FoldingRange};
//!
//! let formatted = format_document("# Week 1\n## Day 1\nSquat/3x5");
//! assert_eq!(formatted, "# Week 1\n    ## Day 1\n        Squat / 3x5");
//!
//! let ranges = FoldingAnalyzer::generate_ranges("# Week 1\n## Day 1\nSquat / 3x5");
//! assert!(ranges.contains(&FoldingRange::new(0, 2)));
//! ```

pub mod document;
pub mod formatter;
pub mod structural;

// Re-export main types and functions
pub use document::{Document, Line};
pub use formatter::{format_document, FormatOptions, Formatter, ScanState};
pub use structural::{FoldingAnalyzer, FoldingRange, LineType, StructuralScanner};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
