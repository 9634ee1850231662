//! Configuration types for the meld hub.
//!
//! The hub is described by a single `meld.jsonc` file with four required
//! sections: registered projects, the fixed set of agents, MCP server
//! declarations, and IDE settings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::Error;

/// Default context root, relative to the hub directory.
pub const DEFAULT_CONTEXT_PATH: &str = "./context/";

/// The closed set of supported agent targets.
///
/// Adding an agent means adding a variant here and a generator for it;
/// shared logic never branches on string identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    ClaudeCode,
    CodexCli,
    GeminiCli,
}

impl AgentKind {
    /// All agents, in canonical order.
    pub const ALL: [AgentKind; 3] = [AgentKind::ClaudeCode, AgentKind::CodexCli, AgentKind::GeminiCli];

    /// The agent's identifier as written in `meld.jsonc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::ClaudeCode => "claude-code",
            AgentKind::CodexCli => "codex-cli",
            AgentKind::GeminiCli => "gemini-cli",
        }
    }

    /// The default subtree name under `agents/`.
    pub fn default_dir(&self) -> &'static str {
        match self {
            AgentKind::ClaudeCode => "claude-code",
            AgentKind::CodexCli => "codex",
            AgentKind::GeminiCli => "gemini",
        }
    }
}

impl FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "claude-code" => Ok(AgentKind::ClaudeCode),
            "codex-cli" => Ok(AgentKind::CodexCli),
            "gemini-cli" => Ok(AgentKind::GeminiCli),
            _ => Err(Error::UnknownAgent {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The validated hub configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub projects: BTreeMap<String, Project>,
    pub agents: BTreeMap<AgentKind, AgentEntry>,
    pub mcp: BTreeMap<String, McpServer>,
    #[serde(default)]
    pub context: Option<String>,
    pub ide: IdeConfig,
}

impl Config {
    /// Effective context root, relative to the hub directory.
    pub fn context_root(&self) -> &str {
        self.context.as_deref().unwrap_or(DEFAULT_CONTEXT_PATH)
    }
}

/// A registered project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub path: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

/// Per-agent settings from the `agents` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentEntry {
    pub enabled: bool,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub overrides: Option<Map<String, Value>>,
}

impl AgentEntry {
    /// Subtree name under `agents/`: the configured override or the
    /// agent's default.
    pub fn resolved_dir(&self, kind: AgentKind) -> &str {
        self.dir.as_deref().unwrap_or(kind.default_dir())
    }
}

/// IDE settings.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeConfig {
    pub default: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
}

/// A declared MCP server.
///
/// Stdio is the default shape; the http variant is discriminated by
/// `"type": "http"` in the raw config.
#[derive(Debug, Clone)]
pub enum McpServer {
    Stdio {
        command: String,
        args: Vec<String>,
        env: Option<BTreeMap<String, String>>,
        agents: Option<Vec<AgentKind>>,
    },
    Http {
        url: String,
        headers: Option<BTreeMap<String, String>>,
        env: Option<BTreeMap<String, String>>,
        agents: Option<Vec<AgentKind>>,
    },
}

impl McpServer {
    /// The server's agent allow-list, if any.
    pub fn agent_scope(&self) -> Option<&[AgentKind]> {
        match self {
            McpServer::Stdio { agents, .. } | McpServer::Http { agents, .. } => agents.as_deref(),
        }
    }

    /// Whether this server should be emitted for the given agent.
    ///
    /// A server with no allow-list applies to every agent.
    pub fn allows(&self, agent: AgentKind) -> bool {
        match self.agent_scope() {
            None => true,
            Some(scope) => scope.contains(&agent),
        }
    }
}

impl<'de> Deserialize<'de> for McpServer {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawServer {
            #[serde(rename = "type")]
            kind: Option<String>,
            command: Option<String>,
            args: Option<Vec<String>>,
            url: Option<String>,
            headers: Option<BTreeMap<String, String>>,
            env: Option<BTreeMap<String, String>>,
            agents: Option<Vec<AgentKind>>,
        }

        let raw = RawServer::deserialize(deserializer)?;
        if raw.kind.as_deref() == Some("http") {
            Ok(McpServer::Http {
                url: raw
                    .url
                    .ok_or_else(|| serde::de::Error::missing_field("url"))?,
                headers: raw.headers,
                env: raw.env,
                agents: raw.agents,
            })
        } else {
            Ok(McpServer::Stdio {
                command: raw
                    .command
                    .ok_or_else(|| serde::de::Error::missing_field("command"))?,
                args: raw
                    .args
                    .ok_or_else(|| serde::de::Error::missing_field("args"))?,
                env: raw.env,
                agents: raw.agents,
            })
        }
    }
}
