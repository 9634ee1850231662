//! Materializing generated files under the hub root.

use meld_fs::{io, HubPath};

use crate::error::Result;
use crate::generator::GeneratedFile;

/// Write every generated file beneath the hub directory, creating parent
/// directories as needed. Each write is atomic; there is no grouping across
/// files, so a rerun heals any interrupted sequence.
pub fn write_files(hub_dir: &HubPath, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let target = hub_dir.join(&file.path);
        io::write_text(&target, &file.content)?;
        tracing::debug!("wrote {}", file.path);
    }
    Ok(())
}
