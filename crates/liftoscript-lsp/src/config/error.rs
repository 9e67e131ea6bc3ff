//! Error types for settings loading

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading `liftoscript.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML or has wrong field types
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Indent width outside the supported range
    #[error("indent_width must be between 1 and {max}, got {value}")]
    IndentWidth { value: usize, max: usize },
}
