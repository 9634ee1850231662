//! Command implementations

use colored::Colorize;

use meld_config::AgentKind;
use meld_core::{generate, GenerateOptions};
use meld_fs::HubPath;

use crate::error::{CliError, Result};

/// Run the generation pipeline and report the outcome.
pub fn run_gen(hub: &str, dry_run: bool, agent: Option<&str>) -> Result<()> {
    let agent = agent
        .map(|name| {
            name.parse::<AgentKind>()
                .map_err(|e| CliError::user(e.to_string()))
        })
        .transpose()?;

    let options = GenerateOptions { dry_run, agent };
    let hub_dir = HubPath::new(hub);

    let report = match generate(&hub_dir, &options) {
        Ok(report) => report,
        Err(err) => {
            if let Some(errors) = err.validation_errors() {
                for error in errors {
                    eprintln!("  {} {}", "✗".red(), error);
                }
                return Err(CliError::user(format!(
                    "{} configuration error(s) in meld.jsonc",
                    errors.len()
                )));
            }
            return Err(err.into());
        }
    };

    for warning in &report.warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }

    if dry_run {
        println!(
            "{} {} file(s) for {} (dry run)",
            "would generate".cyan().bold(),
            report.files.len(),
            report.hub_name
        );
        for file in &report.files {
            println!("  {}", file.path);
        }
    } else {
        println!(
            "{} {} file(s) for {}",
            "generated".green().bold(),
            report.files.len(),
            report.hub_name
        );
    }

    Ok(())
}
