//! The generation pipeline.
//!
//! Sequence: load raw config → validate → interpolate env → typed parse →
//! compose context → run generators → write. Validation aborts before any
//! filesystem mutation; interpolation only ever warns.

use meld_config::{interpolate, loader, schema, AgentKind, EnvVars};
use meld_context::compose;
use meld_fs::{io, HubEntry, HubPath};
use meld_gen::{for_agent, GeneratedFile, GitignoreGenerator, WorkspaceGenerator, Generator};

use crate::error::Result;

/// Options for one generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Compute the file list without touching the filesystem.
    pub dry_run: bool,
    /// Restrict the run to a single agent; hub-root generators are skipped.
    pub agent: Option<AgentKind>,
}

/// The outcome of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Every generated file, hub-relative, in emission order.
    pub files: Vec<GeneratedFile>,
    /// Non-fatal warnings (unset environment variables).
    pub warnings: Vec<String>,
    /// The configured workspace name, for display.
    pub hub_name: String,
}

/// Run the pipeline against the process environment.
pub fn generate(hub_dir: &HubPath, options: &GenerateOptions) -> Result<GenerateReport> {
    generate_with_env(hub_dir, options, &meld_config::env_vars())
}

/// Run the pipeline with an explicit environment map.
pub fn generate_with_env(
    hub_dir: &HubPath,
    options: &GenerateOptions,
    vars: &EnvVars,
) -> Result<GenerateReport> {
    let raw = loader::load_raw(hub_dir)?;
    schema::validate(&raw).map_err(|errors| meld_config::Error::Validation { errors })?;

    let (raw, warnings) = interpolate(raw, vars);
    let config = schema::parse(raw)?;

    tracing::debug!("composing context for {}", hub_dir);
    let context = compose(hub_dir, &config)?;

    let mut files = Vec::new();

    for (kind, agent) in &config.agents {
        if !agent.enabled {
            continue;
        }
        if options.agent.is_some_and(|filter| filter != *kind) {
            continue;
        }

        let agent_dir = agent.resolved_dir(*kind);
        tracing::debug!("running generator {kind}");
        let generated = for_agent(*kind).generate(&config, &context)?;
        files.extend(generated.into_iter().map(|file| GeneratedFile {
            path: format!("{}/{agent_dir}/{}", HubEntry::AgentsDir, file.path),
            content: file.content,
        }));
    }

    if options.agent.is_none() {
        files.extend(WorkspaceGenerator.generate(&config, &context)?);
        files.extend(GitignoreGenerator.generate(&config, &context)?);
    }

    if !options.dry_run {
        for name in config.projects.keys() {
            let artifacts_dir = hub_dir
                .join(HubEntry::ArtifactsDir.as_str())
                .join("projects")
                .join(name);
            io::ensure_dir(&artifacts_dir)?;
        }
        meld_gen::write_files(hub_dir, &files)?;
    }

    Ok(GenerateReport {
        files,
        warnings,
        hub_name: config.ide.workspace_name,
    })
}
