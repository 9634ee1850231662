//! Generation pipeline orchestration for meld.
//!
//! Ties the configuration, context, and generator crates into the single
//! `generate` entry point used by the CLI.

pub mod error;
pub mod generate;

pub use error::{Error, Result};
pub use generate::{generate, generate_with_env, GenerateOptions, GenerateReport};
