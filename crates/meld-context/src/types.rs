//! Composed context passed to every generator.

use serde_json::{Map, Value};

use meld_fs::HubPath;

/// Everything the generators need beyond the config itself.
///
/// Rebuilt from the hub directory on every `generate` run; never persisted.
#[derive(Debug, Clone)]
pub struct ComposedContext {
    /// Absolute hub directory, used for path-scoped permissions and
    /// on-disk reads (gitignore merge).
    pub hub_dir: HubPath,
    /// Markdown preamble describing the hub and its layout.
    pub hub_preamble: String,
    /// Markdown table of registered projects; empty when none.
    pub project_table: String,
    /// Fixed text documenting the artifacts conventions.
    pub artifacts_section: String,
    /// Root-level context markdown, concatenated in filename order.
    pub context: String,
    /// Files from context subdirectories, emitted verbatim per agent.
    pub context_files: Vec<ContextFile>,
    /// Command documents from `commands/`.
    pub commands: Vec<CommandDoc>,
    /// Skill bundles from `skills/*/SKILL.md`.
    pub skills: Vec<SkillDoc>,
}

/// A file collected from a context subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFile {
    /// Path relative to the context root.
    pub path: String,
    pub content: String,
}

/// A command document: one markdown file under `commands/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDoc {
    /// Filename stem.
    pub name: String,
    /// Full file body.
    pub content: String,
}

/// A skill bundle: frontmatter metadata plus body.
#[derive(Debug, Clone)]
pub struct SkillDoc {
    /// Skill directory name.
    pub name: String,
    /// Parsed frontmatter; `model` may be a string or a per-agent map.
    pub frontmatter: Map<String, Value>,
    pub body: String,
}
