//! Sync every project of a monorepo

use std::path::Path;

use colored::Colorize;

use toolkit_core::{SyncEngine, SyncOptions, discover_projects};
use toolkit_fs::NormalizedPath;

use super::sync::print_summary;
use crate::error::{CliError, Result};

/// Run the sync-all command
///
/// Prompts are never shown; orphans and divergences are only reported.
pub fn run_sync_all(path: &Path, dry_run: bool) -> Result<()> {
    let base = NormalizedPath::new(path).canonicalize()?;
    let projects = discover_projects(&base)?;
    if projects.is_empty() {
        return Err(CliError::user(format!(
            "No ai-toolkit.yaml found below {base}"
        )));
    }

    let options = SyncOptions {
        dry_run,
        prune_orphans: false,
    };
    let mut failed = 0;

    for project in &projects {
        println!();
        println!("{} {}", "=>".blue().bold(), project.as_str().bold());

        let outcome = SyncEngine::load(project.clone()).and_then(|engine| engine.run(&options));
        match outcome {
            Ok(result) => {
                print_summary(&result);
                if !result.is_success() {
                    failed += 1;
                }
            }
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                failed += 1;
            }
        }
    }

    println!();
    println!(
        "{} {} project(s), {} failed",
        "Done".green().bold(),
        projects.len(),
        failed
    );

    if failed > 0 {
        return Err(CliError::user(format!("{failed} project(s) failed to sync")));
    }
    Ok(())
}
