//! meld CLI
//!
//! The command-line interface for generating per-agent configuration
//! bundles from a meld hub.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Gen {
            hub,
            dry_run,
            agent,
        }) => commands::run_gen(&hub, dry_run, agent.as_deref()),
        None => {
            println!("{} hub configuration generator", "meld".green().bold());
            println!();
            println!("Run {} for available commands.", "meld --help".cyan());
            Ok(())
        }
    }
}
