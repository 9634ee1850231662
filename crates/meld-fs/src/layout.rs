//! Fixed hub directory layout.

use std::path::Path;

/// The well-known entries of a meld hub directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEntry {
    /// The `meld.jsonc` configuration file
    ConfigFile,
    /// The `context/` directory (default context root)
    ContextDir,
    /// The `commands/` directory
    CommandsDir,
    /// The `skills/` directory
    SkillsDir,
    /// The `artifacts/` directory (agent-produced outputs)
    ArtifactsDir,
    /// The `scratch/` directory (machine-managed working space)
    ScratchDir,
    /// The `agents/` directory (machine-managed generated subtrees)
    AgentsDir,
}

impl HubEntry {
    /// Get the string representation of the entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => "meld.jsonc",
            Self::ContextDir => "context",
            Self::CommandsDir => "commands",
            Self::SkillsDir => "skills",
            Self::ArtifactsDir => "artifacts",
            Self::ScratchDir => "scratch",
            Self::AgentsDir => "agents",
        }
    }
}

impl AsRef<Path> for HubEntry {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for HubEntry {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for HubEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File name of a skill definition inside a skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Extension of markdown documents read from the context and commands roots.
pub const MARKDOWN_EXT: &str = "md";
