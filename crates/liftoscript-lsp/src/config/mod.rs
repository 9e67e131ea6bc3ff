//! Configuration for liftoscript-lsp
//!
//! # Configuration File
//!
//! Settings are loaded from `liftoscript.toml` in the workspace root:
//!
//! ```toml
//! [format]
//! enabled = true
//! indent_width = 4
//!
//! [folding]
//! enabled = true
//! ```
//!
//! Every field is optional; missing fields take the defaults shown above.

mod error;
mod settings;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub use settings::{FoldingSettings, FormatSettings, Settings, CONFIG_FILE_NAME};
