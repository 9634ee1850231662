//! Error types for meld-config

use std::path::PathBuf;

/// Result type for meld-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and validating hub configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `meld.jsonc` file does not exist
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Filesystem failure while reading the config
    #[error(transparent)]
    Fs(#[from] meld_fs::Error),

    /// The config file is not valid JSON-with-comments
    #[error("Invalid JSONC in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// One or more accumulated schema violations
    #[error("Invalid configuration:\n{}", errors.join("\n"))]
    Validation { errors: Vec<String> },

    /// A name outside the fixed agent enumeration
    #[error("Unknown agent: {name}. Must be one of: claude-code, codex-cli, gemini-cli")]
    UnknownAgent { name: String },
}
