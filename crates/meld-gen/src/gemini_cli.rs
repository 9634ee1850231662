//! gemini-cli bundle generation.
//!
//! Emits `GEMINI.md` and `.gemini/settings.json`; commands and skills both
//! become templated command TOML files under `.gemini/commands/meld/`.

use serde_json::{json, Map, Value};

use meld_config::{AgentKind, Config};
use meld_context::{ComposedContext, SkillDoc};

use crate::claude_code::mcp_server_entry;
use crate::error::Result;
use crate::generator::{build_instructions, GeneratedFile, Generator};
use crate::merge::apply_overrides;
use crate::toml::escape_string;

#[derive(Debug, Default)]
pub struct GeminiCliGenerator;

impl Generator for GeminiCliGenerator {
    fn name(&self) -> &'static str {
        AgentKind::GeminiCli.as_str()
    }

    fn generate(&self, config: &Config, context: &ComposedContext) -> Result<Vec<GeneratedFile>> {
        let mut files = vec![
            GeneratedFile::new("GEMINI.md", build_instructions(context)),
            GeneratedFile::new(".gemini/settings.json", build_settings(config)?),
        ];

        for command in &context.commands {
            files.push(GeneratedFile::new(
                format!(".gemini/commands/meld/{}.toml", command.name),
                command_toml(&command.name, &command.content),
            ));
        }

        for skill in &context.skills {
            files.push(GeneratedFile::new(
                format!(".gemini/commands/meld/{}.toml", skill.name),
                skill_toml(skill),
            ));
        }

        for file in &context.context_files {
            files.push(GeneratedFile::new(file.path.clone(), file.content.clone()));
        }

        Ok(files)
    }
}

fn build_settings(config: &Config) -> Result<String> {
    let mut servers = Map::new();
    for (name, server) in &config.mcp {
        if !server.allows(AgentKind::GeminiCli) {
            continue;
        }
        servers.insert(name.clone(), mcp_server_entry(server));
    }

    let settings = json!({ "mcpServers": servers });
    let overrides = config
        .agents
        .get(&AgentKind::GeminiCli)
        .and_then(|agent| agent.overrides.as_ref());

    Ok(serde_json::to_string_pretty(&apply_overrides(settings, overrides))?)
}

/// gemini command template: description plus a triple-quoted prompt block
/// carrying the raw text.
fn command_toml(description: &str, prompt: &str) -> String {
    [
        format!("description = \"{}\"", escape_string(description)),
        String::new(),
        "[template]".to_string(),
        "prompt = \"\"\"".to_string(),
        prompt.to_string(),
        "\"\"\"".to_string(),
    ]
    .join("\n")
}

fn skill_toml(skill: &SkillDoc) -> String {
    let description = skill
        .frontmatter
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(&skill.name);
    format!(
        "# skill: {}\n{}",
        skill.name,
        command_toml(description, &skill.body)
    )
}
