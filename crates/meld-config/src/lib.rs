//! Hub configuration for meld.
//!
//! Loading, validating, and interpolating the `meld.jsonc` hub config.
//! The pipeline is: [`loader::load_raw`] → [`schema::validate`] →
//! [`interpolate::interpolate`] → [`schema::parse`].

pub mod error;
pub mod interpolate;
pub mod loader;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use interpolate::{env_vars, interpolate, EnvVars};
pub use types::{AgentEntry, AgentKind, Config, IdeConfig, McpServer, Project, DEFAULT_CONTEXT_PATH};
