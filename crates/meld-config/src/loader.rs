//! Loading `meld.jsonc` into a raw value tree.
//!
//! The hub config is JSON-with-comments; parsing produces an untyped
//! `serde_json::Value` so that validation and env interpolation can run
//! before the typed [`Config`](crate::Config) is built.

use jsonc_parser::ParseOptions;
use serde_json::Value;

use meld_fs::{io, HubEntry, HubPath};

use crate::error::{Error, Result};

/// Read and parse the hub's `meld.jsonc` into a raw value tree.
pub fn load_raw(hub_dir: &HubPath) -> Result<Value> {
    let config_path = hub_dir.join(HubEntry::ConfigFile.as_str());

    if !config_path.is_file() {
        return Err(Error::NotFound {
            path: config_path.to_native(),
        });
    }

    let raw = io::read_text(&config_path)?;

    let parsed = jsonc_parser::parse_to_serde_value(&raw, &ParseOptions::default()).map_err(
        |e| Error::Parse {
            path: config_path.to_native(),
            message: e.to_string(),
        },
    )?;

    parsed.ok_or_else(|| Error::Parse {
        path: config_path.to_native(),
        message: "empty config document".to_string(),
    })
}
