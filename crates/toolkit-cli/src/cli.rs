//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ai-toolkit - Distribute one set of AI rules, skills and workflows to every editor
#[derive(Parser, Debug)]
#[command(name = "ai-toolkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory with ai-toolkit.yaml)
    #[arg(long, global = true, env = "AI_TOOLKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize content to every enabled editor
    ///
    /// Examples:
    ///   ai-toolkit sync              # Sync and ask about orphans and divergences
    ///   ai-toolkit sync --dry-run    # Show what would change
    ///   ai-toolkit sync --yes        # Remove orphaned files without asking
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Remove orphaned files without asking
        #[arg(short, long, alias = "force")]
        yes: bool,

        /// Output the run result as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Sync, then re-sync whenever the configuration or content changes
    Watch,

    /// Copy a local document into the shared root
    ///
    /// Examples:
    ///   ai-toolkit promote skills/api-designer.md
    ///   ai-toolkit promote .ai-content/rules/style.md --force
    Promote {
        /// Document to promote (relative to .ai-content/ or absolute)
        file: String,

        /// Overwrite an existing shared document
        #[arg(short, long)]
        force: bool,
    },

    /// Sync every project below the root that has an ai-toolkit.yaml
    SyncAll {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// List the supported editors and where they receive content
    ListTargets {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
