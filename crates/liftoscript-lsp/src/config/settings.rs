//! Configuration Settings
//!
//! Defines the configuration structures read from the workspace settings file.

use std::fs;
use std::path::Path;

use liftoscript_core::FormatOptions;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// Settings file looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "liftoscript.toml";

/// Largest accepted indent unit
const MAX_INDENT_WIDTH: usize = 16;

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Formatter settings
    pub format: FormatSettings,
    /// Folding range settings
    pub folding: FoldingSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `liftoscript.toml` from a workspace root, if the file exists
    pub fn discover(root: &Path) -> Result<Option<Self>> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let width = self.format.indent_width;
        if width == 0 || width > MAX_INDENT_WIDTH {
            return Err(ConfigError::IndentWidth {
                value: width,
                max: MAX_INDENT_WIDTH,
            });
        }
        Ok(())
    }
}

/// Formatter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Serve `textDocument/formatting`
    pub enabled: bool,
    /// Spaces per indent unit
    pub indent_width: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            indent_width: FormatOptions::default().indent_width,
        }
    }
}

impl FormatSettings {
    /// Options for the core formatter
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            indent_width: self.indent_width,
        }
    }
}

/// Folding configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldingSettings {
    /// Serve `textDocument/foldingRange`
    pub enabled: bool,
}

impl Default for FoldingSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
