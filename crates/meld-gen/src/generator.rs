//! The generator contract shared by every output target.

use meld_config::{AgentKind, Config};
use meld_context::ComposedContext;

use crate::error::Result;
use crate::{ClaudeCodeGenerator, CodexCliGenerator, GeminiCliGenerator};

/// A file to be materialized under the hub root.
///
/// Paths are hub-relative with forward slashes. Agent generators emit paths
/// relative to their own subtree; the orchestrator prefixes them with
/// `agents/<dir>/` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// One output target: an agent bundle or a hub-root artifact.
pub trait Generator {
    /// The target's slug identifier (e.g. "claude-code", "gitignore")
    fn name(&self) -> &'static str;

    /// Produce the ordered file list for this target.
    ///
    /// Generators do not touch the filesystem except to read existing
    /// state they must merge with (gitignore); writing is the
    /// orchestrator's job.
    fn generate(&self, config: &Config, context: &ComposedContext) -> Result<Vec<GeneratedFile>>;
}

/// The generator for a given agent.
pub fn for_agent(kind: AgentKind) -> Box<dyn Generator> {
    match kind {
        AgentKind::ClaudeCode => Box::new(ClaudeCodeGenerator),
        AgentKind::CodexCli => Box::new(CodexCliGenerator),
        AgentKind::GeminiCli => Box::new(GeminiCliGenerator),
    }
}

/// Assemble the instructions document shared by every agent: preamble,
/// project table (when any), artifacts section, then free-form root
/// context (when any), separated by blank lines.
pub fn build_instructions(context: &ComposedContext) -> String {
    let mut sections = vec![context.hub_preamble.as_str()];

    if !context.project_table.is_empty() {
        sections.push(context.project_table.as_str());
    }

    sections.push(context.artifacts_section.as_str());

    if !context.context.is_empty() {
        sections.push(context.context.as_str());
    }

    sections.join("\n\n")
}
