//! Per-agent configuration generators for meld.
//!
//! Each target implements the [`Generator`] contract: consume the validated
//! config plus composed context and return an ordered list of path/content
//! pairs. Agent generators emit paths relative to their own subtree; the
//! workspace and gitignore generators emit hub-root paths.

pub mod claude_code;
pub mod codex_cli;
pub mod error;
pub mod gemini_cli;
pub mod generator;
pub mod gitignore;
pub mod merge;
pub mod skill;
pub mod toml;
pub mod workspace;
pub mod writer;

pub use claude_code::ClaudeCodeGenerator;
pub use codex_cli::CodexCliGenerator;
pub use error::{Error, Result};
pub use gemini_cli::GeminiCliGenerator;
pub use generator::{build_instructions, for_agent, GeneratedFile, Generator};
pub use gitignore::GitignoreGenerator;
pub use merge::{apply_overrides, deep_merge};
pub use toml::serialize_toml;
pub use workspace::WorkspaceGenerator;
pub use writer::write_files;
