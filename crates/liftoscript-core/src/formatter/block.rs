//! Custom block (`{~ ... ~}`) marker detection

/// Opens an embedded code block
pub const BLOCK_OPEN: &str = "{~";
/// Closes an embedded code block
pub const BLOCK_CLOSE: &str = "~}";

/// How a line outside a block relates to the block markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarkers<'a> {
    /// No opening marker
    None,
    /// Both markers on the same line; never enters block mode
    SingleLine {
        before: &'a str,
        block: &'a str,
        after: &'a str,
    },
    /// Opening marker and no closing marker; `marker` runs from `{~` to line end
    Open { before: &'a str, marker: &'a str },
}

impl<'a> BlockMarkers<'a> {
    /// Split a trimmed line around its first `{~`
    ///
    /// Any line holding both markers is a single-line block. When every `~}`
    /// precedes the first `{~`, the block runs from `{~` to the end of the line.
    pub fn split(trimmed: &'a str) -> Self {
        let Some(start) = trimmed.find(BLOCK_OPEN) else {
            return BlockMarkers::None;
        };
        let before = trimmed[..start].trim();

        // `{` is one byte, so start + 1 is a char boundary; this lets "{~}" close itself
        match trimmed[start + 1..].find(BLOCK_CLOSE) {
            Some(offset) => {
                let end = start + 1 + offset + BLOCK_CLOSE.len();
                BlockMarkers::SingleLine {
                    before,
                    block: &trimmed[start..end],
                    after: trimmed[end..].trim(),
                }
            }
            None if trimmed[..start].contains(BLOCK_CLOSE) => BlockMarkers::SingleLine {
                before,
                block: &trimmed[start..],
                after: "",
            },
            None => BlockMarkers::Open {
                before,
                marker: &trimmed[start..],
            },
        }
    }
}
