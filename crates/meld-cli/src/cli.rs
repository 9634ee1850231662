//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// meld - one hub configuration fanned out to every coding agent
#[derive(Parser, Debug)]
#[command(name = "meld")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate agent configuration bundles from the hub config
    ///
    /// Reads meld.jsonc plus the context/commands/skills directories and
    /// rewrites every enabled agent's subtree under agents/.
    ///
    /// Examples:
    ///   meld gen                     # Regenerate everything
    ///   meld gen --dry-run           # Preview without writing
    ///   meld gen --agent claude-code # Only one agent's subtree
    Gen {
        /// Hub directory containing meld.jsonc
        #[arg(long, default_value = ".")]
        hub: String,

        /// Preview generated files without writing them
        #[arg(long)]
        dry_run: bool,

        /// Restrict generation to a single agent
        /// (claude-code, codex-cli, gemini-cli)
        #[arg(long)]
        agent: Option<String>,
    },
}
