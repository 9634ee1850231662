//! Filesystem primitives for the meld hub.
//!
//! Provides forward-slash-normalized paths, the fixed hub directory layout,
//! and atomic file I/O used by the generation pipeline.

pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use error::{Error, Result};
pub use layout::{HubEntry, MARKDOWN_EXT, SKILL_FILE};
pub use path::HubPath;
