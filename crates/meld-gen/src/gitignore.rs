//! Managed `.gitignore` block generation.
//!
//! The hub's `.gitignore` carries one sentinel-delimited region owned by
//! meld; everything outside the sentinels belongs to the user and is
//! preserved on every regeneration.

use meld_config::Config;
use meld_context::ComposedContext;
use meld_fs::io;

use crate::error::Result;
use crate::generator::{GeneratedFile, Generator};

pub const START_MARKER: &str = "# ── meld managed (do not edit) ──";
pub const END_MARKER: &str = "# ── end meld managed ──";

/// Machine-managed hub directories that never belong in version control.
const MANAGED_ENTRIES: [&str; 2] = ["agents/", "scratch/"];

#[derive(Debug, Default)]
pub struct GitignoreGenerator;

impl Generator for GitignoreGenerator {
    fn name(&self) -> &'static str {
        "gitignore"
    }

    fn generate(&self, _config: &Config, context: &ComposedContext) -> Result<Vec<GeneratedFile>> {
        let mut block_lines = vec![START_MARKER];
        block_lines.extend(MANAGED_ENTRIES);
        block_lines.push(END_MARKER);
        let managed_block = block_lines.join("\n");

        let gitignore_path = context.hub_dir.join(".gitignore");
        let content = if gitignore_path.is_file() {
            splice(&io::read_text(&gitignore_path)?, &managed_block)
        } else {
            format!("{managed_block}\n")
        };

        Ok(vec![GeneratedFile::new(".gitignore", content)])
    }
}

/// Replace the sentinel region inclusive when both markers are present;
/// otherwise append the managed block after the trimmed existing content.
fn splice(existing: &str, managed_block: &str) -> String {
    match (existing.find(START_MARKER), existing.find(END_MARKER)) {
        (Some(start), Some(end)) => {
            let before = &existing[..start];
            let after = &existing[end + END_MARKER.len()..];
            format!("{before}{managed_block}{after}")
        }
        _ => {
            let trimmed = existing.trim_end();
            if trimmed.is_empty() {
                format!("{managed_block}\n")
            } else {
                format!("{trimmed}\n\n{managed_block}\n")
            }
        }
    }
}
