//! codex-cli bundle generation.
//!
//! Emits `AGENTS.md` and `.codex/config.toml`; commands and skills both
//! materialize as SKILL.md bundles under `.agents/skills/`.

use serde_json::{json, Map, Value};

use meld_config::{AgentKind, Config, McpServer};
use meld_context::ComposedContext;

use crate::error::Result;
use crate::generator::{build_instructions, GeneratedFile, Generator};
use crate::merge::apply_overrides;
use crate::skill::render_skill;
use crate::toml::serialize_toml;

#[derive(Debug, Default)]
pub struct CodexCliGenerator;

impl Generator for CodexCliGenerator {
    fn name(&self) -> &'static str {
        AgentKind::CodexCli.as_str()
    }

    fn generate(&self, config: &Config, context: &ComposedContext) -> Result<Vec<GeneratedFile>> {
        let mut files = vec![
            GeneratedFile::new("AGENTS.md", build_instructions(context)),
            GeneratedFile::new(".codex/config.toml", build_config_toml(config, context)?),
        ];

        for command in &context.commands {
            files.push(GeneratedFile::new(
                format!(".agents/skills/meld-cmd-{}/SKILL.md", command.name),
                command.content.clone(),
            ));
        }

        for skill in &context.skills {
            files.push(GeneratedFile::new(
                format!(".agents/skills/meld-{}/SKILL.md", skill.name),
                render_skill(skill, AgentKind::CodexCli),
            ));
        }

        for file in &context.context_files {
            files.push(GeneratedFile::new(file.path.clone(), file.content.clone()));
        }

        Ok(files)
    }
}

fn build_config_toml(config: &Config, context: &ComposedContext) -> Result<String> {
    let mut writable_roots = vec![context.hub_dir.as_str().to_string()];
    for project in config.projects.values() {
        if !writable_roots.contains(&project.path) {
            writable_roots.push(project.path.clone());
        }
    }

    let mut table = Map::new();
    table.insert("approval_policy".to_string(), json!("on-request"));
    table.insert("sandbox_mode".to_string(), json!("workspace-write"));
    table.insert(
        "sandbox_workspace_write".to_string(),
        json!({ "writable_roots": writable_roots }),
    );

    let servers = build_mcp_servers(config);
    if !servers.is_empty() {
        table.insert("mcp_servers".to_string(), Value::Object(servers));
    }

    let overrides = config
        .agents
        .get(&AgentKind::CodexCli)
        .and_then(|agent| agent.overrides.as_ref());

    serialize_toml(&apply_overrides(Value::Object(table), overrides))
}

/// codex names the http header map `http_headers`; empty maps are omitted.
fn build_mcp_servers(config: &Config) -> Map<String, Value> {
    let mut servers = Map::new();
    for (name, server) in &config.mcp {
        if !server.allows(AgentKind::CodexCli) {
            continue;
        }
        let mut entry = Map::new();
        match server {
            McpServer::Http {
                url, headers, env, ..
            } => {
                entry.insert("url".to_string(), json!(url));
                if let Some(headers) = headers {
                    if !headers.is_empty() {
                        entry.insert("http_headers".to_string(), json!(headers));
                    }
                }
                if let Some(env) = env {
                    if !env.is_empty() {
                        entry.insert("env".to_string(), json!(env));
                    }
                }
            }
            McpServer::Stdio {
                command, args, env, ..
            } => {
                entry.insert("command".to_string(), json!(command));
                entry.insert("args".to_string(), json!(args));
                if let Some(env) = env {
                    if !env.is_empty() {
                        entry.insert("env".to_string(), json!(env));
                    }
                }
            }
        }
        servers.insert(name.clone(), Value::Object(entry));
    }
    servers
}

#[cfg(test)]
mod tests {
    use super::*;
    use meld_fs::HubPath;
    use pretty_assertions::assert_eq;

    fn make_config(extra: Value) -> Config {
        let mut raw = json!({
            "projects": {"myapp": {"path": "~/myapp", "aliases": ["app"]}},
            "agents": {
                "claude-code": {"enabled": false},
                "codex-cli": {"enabled": true},
                "gemini-cli": {"enabled": false}
            },
            "mcp": {},
            "ide": {"default": "cursor", "workspaceName": "test"}
        });
        if let (Some(base), Some(patch)) = (raw.as_object_mut(), extra.as_object()) {
            for (key, value) in patch {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(raw).unwrap()
    }

    fn make_context() -> ComposedContext {
        ComposedContext {
            hub_dir: HubPath::new("/tmp/hub"),
            hub_preamble: "# Test Hub".to_string(),
            project_table: String::new(),
            artifacts_section: "## Artifacts".to_string(),
            context: String::new(),
            context_files: vec![],
            commands: vec![],
            skills: vec![],
        }
    }

    fn config_toml(config: &Config) -> ::toml::Value {
        let files = CodexCliGenerator.generate(config, &make_context()).unwrap();
        let file = files.iter().find(|f| f.path == ".codex/config.toml").unwrap();
        file.content.parse().unwrap()
    }

    #[test]
    fn test_sandbox_settings() {
        let parsed = config_toml(&make_config(json!({})));
        assert_eq!(parsed["approval_policy"].as_str(), Some("on-request"));
        assert_eq!(parsed["sandbox_mode"].as_str(), Some("workspace-write"));
        let roots: Vec<&str> = parsed["sandbox_workspace_write"]["writable_roots"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(roots, vec!["/tmp/hub", "~/myapp"]);
    }

    #[test]
    fn test_writable_roots_deduplicated() {
        let config = make_config(json!({
            "projects": {
                "a": {"path": "~/same", "aliases": []},
                "b": {"path": "~/same", "aliases": []}
            }
        }));
        let parsed = config_toml(&config);
        let roots = parsed["sandbox_workspace_write"]["writable_roots"]
            .as_array()
            .unwrap();
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn test_mcp_servers_table() {
        let config = make_config(json!({
            "mcp": {
                "ctx": {
                    "type": "http",
                    "url": "https://mcp.example.com/mcp",
                    "headers": {"Authorization": "Bearer tok"}
                },
                "local": {"command": "npx", "args": ["-y", "local-mcp"]}
            }
        }));
        let parsed = config_toml(&config);
        assert_eq!(
            parsed["mcp_servers"]["ctx"]["url"].as_str(),
            Some("https://mcp.example.com/mcp")
        );
        assert_eq!(
            parsed["mcp_servers"]["ctx"]["http_headers"]["Authorization"].as_str(),
            Some("Bearer tok")
        );
        assert_eq!(parsed["mcp_servers"]["local"]["command"].as_str(), Some("npx"));
    }

    #[test]
    fn test_mcp_table_omitted_when_all_filtered() {
        let config = make_config(json!({
            "mcp": {
                "other": {"command": "npx", "args": [], "agents": ["claude-code"]}
            }
        }));
        let files = CodexCliGenerator.generate(&config, &make_context()).unwrap();
        let file = files.iter().find(|f| f.path == ".codex/config.toml").unwrap();
        assert!(!file.content.contains("mcp_servers"));
    }

    #[test]
    fn test_overrides_merge_into_toml() {
        let config = make_config(json!({
            "agents": {
                "claude-code": {"enabled": false},
                "codex-cli": {
                    "enabled": true,
                    "overrides": {
                        "approval_policy": "never",
                        "model": "o3",
                        "sandbox_workspace_write": {"network_access": true}
                    }
                },
                "gemini-cli": {"enabled": false}
            }
        }));
        let parsed = config_toml(&config);
        assert_eq!(parsed["approval_policy"].as_str(), Some("never"));
        assert_eq!(parsed["model"].as_str(), Some("o3"));
        assert_eq!(
            parsed["sandbox_workspace_write"]["network_access"].as_bool(),
            Some(true)
        );
        // Generated keys survive the merge
        assert!(parsed["sandbox_workspace_write"]["writable_roots"].is_array());
    }

    #[test]
    fn test_command_and_skill_bundles() {
        let mut context = make_context();
        context.commands = vec![meld_context::CommandDoc {
            name: "review".to_string(),
            content: "Do review".to_string(),
        }];
        context.skills = vec![meld_context::SkillDoc {
            name: "deep-review".to_string(),
            frontmatter: json!({"model": {"codex-cli": "o3"}}).as_object().unwrap().clone(),
            body: "Body.".to_string(),
        }];
        let files = CodexCliGenerator.generate(&make_config(json!({})), &context).unwrap();

        let cmd = files
            .iter()
            .find(|f| f.path == ".agents/skills/meld-cmd-review/SKILL.md")
            .unwrap();
        assert_eq!(cmd.content, "Do review");

        let skill = files
            .iter()
            .find(|f| f.path == ".agents/skills/meld-deep-review/SKILL.md")
            .unwrap();
        assert!(skill.content.contains("model: o3"));
    }
}
