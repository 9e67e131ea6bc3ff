//! Library integration tests for liftoscript-core
//!
//! Exercises the public API the way an editor adapter uses it: raw text in,
//! replacement text or folding ranges out.

use liftoscript_core::formatter::normalize_slashes;
use liftoscript_core::{format_document, Document, FoldingAnalyzer, FoldingRange};

const PROGRAM: &str = "\
# Week 1
## Day 1
Squat/3x5/100lb
Bench Press  /  3x8 / 60lb {~ progress: lp(5lb) ~}

## Day 2
Deadlift / 1x5 {~
if (completedReps >= reps) {
// add weight
weights += 5lb
}
~}
# Week 2
Press/3x5";

#[test]
fn test_heading_indentation() {
    assert_eq!(format_document("# A\n## B\ntext"), "# A\n    ## B\n        text");
}

#[test]
fn test_slash_normalization_examples() {
    assert_eq!(normalize_slashes("a/b"), "a / b");
    assert_eq!(normalize_slashes("a  /   b"), "a / b");
    assert_eq!(normalize_slashes("a / b"), "a / b");
}

#[test]
fn test_single_line_block_under_subheading() {
    assert_eq!(
        format_document("## B\nx / y {~ z ~} w"),
        "    ## B\n        x / y {~ z ~} w"
    );
}

#[test]
fn test_format_program() {
    let expected = "\
# Week 1
    ## Day 1
        Squat / 3x5 / 100lb
        Bench Press / 3x8 / 60lb {~ progress: lp(5lb) ~}

    ## Day 2
        Deadlift / 1x5 {~
            if (completedReps >= reps) {
        // add weight
                weights += 5lb
            }
        ~}
# Week 2
Press / 3x5";

    assert_eq!(format_document(PROGRAM), expected);
}

#[test]
fn test_format_is_idempotent() {
    let once = format_document(PROGRAM);
    assert_eq!(format_document(&once), once);
}

#[test]
fn test_format_preserves_line_count() {
    let text = "# A\r\n\r\n## B\r\nx\r\n";
    let formatted = format_document(text);
    assert_eq!(
        Document::parse(&formatted).line_count(),
        Document::parse(text).line_count()
    );
}

#[test]
fn test_folding_basic_case() {
    let ranges = FoldingAnalyzer::generate_ranges("# A\nbody1\n## B\nbody2\n# C\nbody3");

    assert!(ranges.contains(&FoldingRange::new(0, 3)));
    assert!(ranges.contains(&FoldingRange::new(2, 3)));
    assert!(ranges.contains(&FoldingRange::new(4, 5)));
    assert_eq!(ranges.len(), 3);
}

#[test]
fn test_folding_no_body_heading() {
    let ranges = FoldingAnalyzer::generate_ranges("# A\n# B\nbody");
    assert_eq!(ranges, vec![FoldingRange::new(1, 2)]);
}

#[test]
fn test_folding_is_stable_under_formatting() {
    let before = FoldingAnalyzer::generate_ranges(PROGRAM);
    let after = FoldingAnalyzer::generate_ranges(&format_document(PROGRAM));
    assert_eq!(before, after);
}
