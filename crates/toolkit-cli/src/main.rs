//! ai-toolkit CLI
//!
//! Distributes `.ai-content/` to every enabled editor and keeps it
//! reconciled with an optional shared root.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

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
    logging::init(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.root.as_deref()),
        None => {
            // No command provided - show help hint
            println!("{} AI content toolkit", "ai-toolkit".green().bold());
            println!();
            println!("Run {} for available commands.", "ai-toolkit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: Option<&Path>) -> Result<()> {
    match cmd {
        Commands::Sync { dry_run, yes, json } => {
            commands::run_sync(&context::resolve_root(root)?, dry_run, yes, json)
        }
        Commands::Watch => commands::run_watch(&context::resolve_root(root)?),
        Commands::Promote { file, force } => {
            commands::run_promote(&context::resolve_root(root)?, &file, force)
        }
        Commands::SyncAll { dry_run } => {
            commands::run_sync_all(&context::resolve_base(root)?, dry_run)
        }
        Commands::ListTargets { json } => commands::run_list_targets(json),
    }
}
