//! claude-code bundle generation.
//!
//! Emits `CLAUDE.md`, `.mcp.json`, `.claude/settings.json`, plus command,
//! skill, and verbatim context files.

use serde_json::{json, Map, Value};

use meld_config::{AgentKind, Config, McpServer};
use meld_context::{ComposedContext, SkillDoc};

use crate::error::Result;
use crate::generator::{build_instructions, GeneratedFile, Generator};
use crate::merge::apply_overrides;
use crate::skill::render_skill;

/// Tools that never mutate state, allowed without path scoping.
const SAFE_TOOLS: [&str; 4] = ["Task", "WebSearch", "WebFetch", "ToolSearch"];

/// Bash commands allowed by prefix. Not path-scoped: flags break prefix
/// matching against paths.
const SAFE_BASH_COMMANDS: [&str; 17] = [
    "cd", "ls", "mkdir", "cp", "mv", "cat", "git", "gh", "node", "npx", "npm", "yarn", "pnpm",
    "bun", "which", "pwd", "ast-grep",
];

/// Tools granted per directory subtree.
const SCOPED_TOOLS: [&str; 5] = ["Read", "Glob", "Grep", "Write", "Edit"];

#[derive(Debug, Default)]
pub struct ClaudeCodeGenerator;

impl Generator for ClaudeCodeGenerator {
    fn name(&self) -> &'static str {
        AgentKind::ClaudeCode.as_str()
    }

    fn generate(&self, config: &Config, context: &ComposedContext) -> Result<Vec<GeneratedFile>> {
        let mut files = vec![
            GeneratedFile::new("CLAUDE.md", build_instructions(context)),
            GeneratedFile::new(".mcp.json", build_mcp_config(config)?),
            GeneratedFile::new(
                ".claude/settings.json",
                build_settings(config, context.hub_dir.as_str())?,
            ),
        ];

        for command in &context.commands {
            files.push(GeneratedFile::new(
                format!(".claude/commands/meld/{}.md", command.name),
                command.content.clone(),
            ));
        }

        for skill in &context.skills {
            files.push(build_skill_file(skill));
        }

        for file in &context.context_files {
            files.push(GeneratedFile::new(file.path.clone(), file.content.clone()));
        }

        Ok(files)
    }
}

fn build_mcp_config(config: &Config) -> Result<String> {
    let mut servers = Map::new();
    for (name, server) in &config.mcp {
        if !server.allows(AgentKind::ClaudeCode) {
            continue;
        }
        servers.insert(name.clone(), mcp_server_entry(server));
    }

    Ok(serde_json::to_string_pretty(&json!({ "mcpServers": servers }))?)
}

/// The per-server shape shared with gemini-cli settings: http servers carry
/// `type`/`url`/`headers?`/`env?`, stdio carry `command`/`args`/`env?`.
pub(crate) fn mcp_server_entry(server: &McpServer) -> Value {
    let mut entry = Map::new();
    match server {
        McpServer::Http {
            url, headers, env, ..
        } => {
            entry.insert("type".to_string(), json!("http"));
            entry.insert("url".to_string(), json!(url));
            if let Some(headers) = headers {
                entry.insert("headers".to_string(), json!(headers));
            }
            if let Some(env) = env {
                entry.insert("env".to_string(), json!(env));
            }
        }
        McpServer::Stdio {
            command, args, env, ..
        } => {
            entry.insert("command".to_string(), json!(command));
            entry.insert("args".to_string(), json!(args));
            if let Some(env) = env {
                entry.insert("env".to_string(), json!(env));
            }
        }
    }
    Value::Object(entry)
}

fn build_settings(config: &Config, hub_dir: &str) -> Result<String> {
    let mut allow: Vec<String> = SAFE_TOOLS.iter().map(|t| t.to_string()).collect();

    for cmd in SAFE_BASH_COMMANDS {
        allow.push(format!("Bash(command:{cmd} *)"));
    }

    for tool in SCOPED_TOOLS {
        allow.push(format!("{tool}(//{hub_dir}/**)"));
    }

    let mut additional_directories = Vec::new();
    for project in config.projects.values() {
        for tool in SCOPED_TOOLS {
            allow.push(format!("{tool}(//{}/**)", project.path));
        }
        additional_directories.push(project.path.clone());
    }

    let settings = json!({
        // Lazy MCP tool loading
        "env": { "ENABLE_TOOL_SEARCH": "true" },
        "permissions": {
            "allow": allow,
            "additionalDirectories": additional_directories,
        },
    });

    let overrides = config
        .agents
        .get(&AgentKind::ClaudeCode)
        .and_then(|agent| agent.overrides.as_ref());

    Ok(serde_json::to_string_pretty(&apply_overrides(settings, overrides))?)
}

fn build_skill_file(skill: &SkillDoc) -> GeneratedFile {
    GeneratedFile::new(
        format!(".claude/skills/meld-{}/SKILL.md", skill.name),
        render_skill(skill, AgentKind::ClaudeCode),
    )
}
