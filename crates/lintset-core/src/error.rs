//! Error types for preset loading and composition

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lintset operations
#[derive(Debug, Error)]
pub enum LintsetError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// An extension list referenced a ruleset name that is not registered
    #[error("Unknown ruleset '{name}'")]
    UnknownRuleset { name: String },

    /// A preset file extends itself, directly or through other files
    #[error("Circular extends chain: {chain}")]
    CircularExtends { chain: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax or shape errors in a preset file
    #[error("Parse error in '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

impl LintsetError {
    /// Shorthand for a [`LintsetError::Config`] with a formatted message
    pub fn config(message: impl Into<String>) -> Self {
        LintsetError::Config {
            message: message.into(),
        }
    }
}
