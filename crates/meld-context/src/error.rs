//! Error types for meld-context

/// Result type for meld-context operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing hub context
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] meld_fs::Error),
}
