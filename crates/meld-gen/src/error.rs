//! Error types for meld-gen

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating agent configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] meld_fs::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML cannot represent non-finite numbers
    #[error("Cannot serialize non-finite number to TOML: {value}")]
    NonFiniteNumber { value: f64 },

    /// A value shape the TOML emitter does not support (fed through
    /// overrides); indicates malformed input, fails hard
    #[error("Unsupported TOML value type: {kind}")]
    UnsupportedTomlValue { kind: &'static str },
}
