//! Composing hub context into the bundle consumed by generators.
//!
//! Reads the context root, `commands/`, and `skills/` directories and
//! synthesizes the hub preamble, project table, and artifacts section.
//! Missing directories yield empty results, never errors; directory
//! traversal is sorted so repeated runs produce identical output.

use std::collections::BTreeMap;
use std::fs;

use meld_fs::{Error as FsError, HubEntry, HubPath, MARKDOWN_EXT, SKILL_FILE};
use meld_config::{Config, Project};

use crate::error::Result;
use crate::frontmatter;
use crate::types::{CommandDoc, ComposedContext, ContextFile, SkillDoc};

/// Fixed text documenting where agents should place their outputs.
const ARTIFACTS_SECTION: &str = "## Artifacts

Durable outputs belong under `artifacts/`, not inside project repositories:

- `artifacts/hub/` — hub-wide deliverables
- `artifacts/projects/{project-name}/` — deliverables for a single project
- `scratch/` — disposable intermediates; may be cleaned at any time";

/// Compose the full context bundle for one generation run.
pub fn compose(hub_dir: &HubPath, config: &Config) -> Result<ComposedContext> {
    let context_root = hub_dir.join(config.context_root());

    Ok(ComposedContext {
        hub_dir: hub_dir.clone(),
        hub_preamble: build_preamble(&config.ide.workspace_name),
        project_table: build_project_table(&config.projects),
        artifacts_section: ARTIFACTS_SECTION.to_string(),
        context: read_root_context(&context_root)?,
        context_files: collect_context_files(&context_root)?,
        commands: read_commands(&hub_dir.join(HubEntry::CommandsDir.as_str()))?,
        skills: read_skills(&hub_dir.join(HubEntry::SkillsDir.as_str()))?,
    })
}

fn build_preamble(workspace_name: &str) -> String {
    format!(
        "# {workspace_name}

This workspace is a meld hub: one configuration source fanned out to every
enabled coding agent. Edit the hub inputs, then run `meld gen` to regenerate
each agent's bundle.

## Hub Structure

- `meld.jsonc` — hub configuration (projects, agents, MCP servers)
- `context/` — shared context; root markdown is folded into this document
- `commands/` — command documents fanned out per agent
- `skills/` — skill bundles fanned out per agent
- `artifacts/` — durable outputs produced by agents
- `scratch/` — machine-managed working space (do not edit)
- `agents/` — machine-managed generated subtrees (do not edit)"
    )
}

fn build_project_table(projects: &BTreeMap<String, Project>) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "## Projects".to_string(),
        String::new(),
        "| Project | Aliases | Path | Repo |".to_string(),
        "| --- | --- | --- | --- |".to_string(),
    ];
    for (name, project) in projects {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            name,
            project.aliases.join(", "),
            project.path,
            project.repo.as_deref().unwrap_or("")
        ));
    }
    lines.join("\n")
}

/// Concatenate root-level markdown files, sorted by filename.
fn read_root_context(context_root: &HubPath) -> Result<String> {
    if !context_root.is_dir() {
        return Ok(String::new());
    }

    let mut sections = Vec::new();
    for (name, path) in sorted_entries(context_root)? {
        if path.is_file() && name.ends_with(&format!(".{MARKDOWN_EXT}")) {
            sections.push(meld_fs::io::read_text(&path)?);
        }
    }
    Ok(sections.join("\n\n"))
}

/// Collect every file inside subdirectories of the context root, at any
/// depth, keyed by its path relative to the context root.
fn collect_context_files(context_root: &HubPath) -> Result<Vec<ContextFile>> {
    let mut files = Vec::new();
    if !context_root.is_dir() {
        return Ok(files);
    }

    for (name, path) in sorted_entries(context_root)? {
        if path.is_dir() {
            collect_files_recursive(&path, &name, &mut files)?;
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn collect_files_recursive(dir: &HubPath, prefix: &str, files: &mut Vec<ContextFile>) -> Result<()> {
    for (name, path) in sorted_entries(dir)? {
        let relative = format!("{prefix}/{name}");
        if path.is_dir() {
            collect_files_recursive(&path, &relative, files)?;
        } else {
            files.push(ContextFile {
                path: relative,
                content: meld_fs::io::read_text(&path)?,
            });
        }
    }
    Ok(())
}

/// One command per markdown file in `commands/`, non-recursive.
fn read_commands(commands_dir: &HubPath) -> Result<Vec<CommandDoc>> {
    let mut commands = Vec::new();
    if !commands_dir.is_dir() {
        return Ok(commands);
    }

    for (name, path) in sorted_entries(commands_dir)? {
        let Some(stem) = name.strip_suffix(&format!(".{MARKDOWN_EXT}")) else {
            continue;
        };
        if path.is_file() {
            commands.push(CommandDoc {
                name: stem.to_string(),
                content: meld_fs::io::read_text(&path)?,
            });
        }
    }
    Ok(commands)
}

/// One skill per immediate subdirectory of `skills/` containing a SKILL.md
/// with a frontmatter block. Anything else is skipped.
fn read_skills(skills_dir: &HubPath) -> Result<Vec<SkillDoc>> {
    let mut skills = Vec::new();
    if !skills_dir.is_dir() {
        return Ok(skills);
    }

    for (name, path) in sorted_entries(skills_dir)? {
        if !path.is_dir() {
            continue;
        }
        let skill_file = path.join(SKILL_FILE);
        if !skill_file.is_file() {
            tracing::warn!("Skipping skill {name}: no {SKILL_FILE}");
            continue;
        }
        let content = meld_fs::io::read_text(&skill_file)?;
        let Some((raw_frontmatter, body)) = frontmatter::split(&content) else {
            tracing::warn!("Skipping skill {name}: {SKILL_FILE} has no frontmatter block");
            continue;
        };
        let Some(parsed) = frontmatter::parse(&raw_frontmatter) else {
            tracing::warn!("Skipping skill {name}: unparseable frontmatter");
            continue;
        };
        skills.push(SkillDoc {
            name,
            frontmatter: parsed,
            body,
        });
    }
    Ok(skills)
}

/// Directory entries sorted by name, as (name, path) pairs.
fn sorted_entries(dir: &HubPath) -> Result<Vec<(String, HubPath)>> {
    let native = dir.to_native();
    let entries = fs::read_dir(&native).map_err(|e| FsError::io(&native, e))?;

    let mut named = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::io(&native, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        named.push((name.clone(), dir.join(&name)));
    }
    named.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(named)
}
