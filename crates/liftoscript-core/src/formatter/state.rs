//! Scan state carried from line to line while formatting

/// Formatter state threaded through the line loop
///
/// Exactly one of in-block / not-in-block holds at a time. `code_depth` only
/// matters while `in_custom_block` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Inside a multi-line `{~ ... ~}` block
    pub in_custom_block: bool,
    /// Brace nesting depth of the embedded code
    pub code_depth: usize,
    /// Last heading seen was a subheading (`##` or deeper)
    pub inside_subheading: bool,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_block(&mut self) {
        self.in_custom_block = true;
        self.code_depth = 0;
    }

    pub fn exit_block(&mut self) {
        self.in_custom_block = false;
        self.code_depth = 0;
    }

    /// One level shallower, floored at zero
    pub fn dedent(&mut self) {
        self.code_depth = self.code_depth.saturating_sub(1);
    }

    pub fn indent(&mut self) {
        self.code_depth += 1;
    }
}
