//! Liftoscript Language Server Protocol implementation
//!
//! This library binds the `liftoscript-core` algorithms to editors:
//! - Document formatting (one whole-document edit)
//! - Folding ranges for the `#` heading hierarchy
//!
//! # Library Usage
//!
//! ```ignore
//! use liftoscript_lsp::run_server;
//!
//! // Run the LSP server on stdin/stdout
//! run_server().await;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Start the language server (typically called by an editor)
//! liftoscript-lsp
//!
//! # With debug logging
//! RUST_LOG=debug liftoscript-lsp
//! ```

pub mod config;
pub mod server;

// Re-export main entry point
pub use server::{run_server, Backend};

// Re-export commonly used types
pub use config::{ConfigError, Settings};
