//! Error types for meld-core

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a generation run.
///
/// All of these surface before any filesystem mutation except [`Error::Gen`]
/// and [`Error::Fs`], which can occur during generation and writing; the
/// per-file atomic writes plus rerun idempotence make a partial sequence
/// self-healing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] meld_config::Error),

    #[error(transparent)]
    Context(#[from] meld_context::Error),

    #[error(transparent)]
    Gen(#[from] meld_gen::Error),

    #[error(transparent)]
    Fs(#[from] meld_fs::Error),
}

impl Error {
    /// The accumulated schema violations, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Error::Config(meld_config::Error::Validation { errors }) => Some(errors),
            _ => None,
        }
    }
}
