//! Structural analysis for Liftoscript documents
//!
//! This module classifies lines and derives folding ranges from the
//! `#` heading hierarchy.

pub mod folding;
pub mod scanner;

pub use folding::{FoldingAnalyzer, FoldingRange};
pub use scanner::{LineType, StructuralScanner};
