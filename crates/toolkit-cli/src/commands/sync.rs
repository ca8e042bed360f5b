//! Sync command implementation
//!
//! Runs one pass, prints what happened, then asks about every item that
//! needs a decision: divergences, shared orphans and orphaned files.

use std::path::Path;

use colored::Colorize;

use toolkit_core::{
    Direction, DivergenceRecord, Resolution, SyncEngine, SyncOptions, SyncRunResult,
    apply_divergence, remove_orphan, remove_shared_orphan,
};
use toolkit_fs::NormalizedPath;

use crate::error::{CliError, Result};
use crate::interactive;

/// Run the sync command
pub fn run_sync(path: &Path, dry_run: bool, yes: bool, json: bool) -> Result<()> {
    let engine = SyncEngine::load(NormalizedPath::new(path))?;
    let options = SyncOptions {
        dry_run,
        prune_orphans: yes,
    };

    if json {
        let result = engine.run(&options)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return finish(&result);
    }

    println!("{} Syncing {}...", "=>".blue().bold(), engine.root());
    let result = engine.run(&options)?;
    print_summary(&result);

    if !dry_run && resolve_interactively(&result)? {
        println!();
        println!("{} Re-syncing updated local content...", "=>".blue().bold());
        let rerun = engine.run(&SyncOptions::default())?;
        print_actions(&rerun);
        return finish(&rerun);
    }

    finish(&result)
}

/// Exit status of a run: failure when any item reported an error.
pub(crate) fn finish(result: &SyncRunResult) -> Result<()> {
    if result.is_success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "sync finished with {} error(s)",
            result.errors.len()
        )))
    }
}

/// Print a run result in human-readable form.
pub(crate) fn print_summary(result: &SyncRunResult) {
    for warning in &result.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    print_actions(result);

    let verb = if result.dry_run { "Would sync" } else { "Synced" };
    println!(
        "{} {} {} file(s)",
        "OK".green().bold(),
        verb,
        result.written.len()
    );

    for path in &result.removed {
        println!("   {} Removed {}", "-".red(), path);
    }
    for path in &result.promoted {
        println!("   {} Promoted {}", "^".cyan(), path.as_str().cyan());
    }

    if !result.pending_orphans.is_empty() {
        println!();
        println!(
            "{} {} file(s) no longer produced by any document:",
            "ORPHANED".yellow().bold(),
            result.pending_orphans.len()
        );
        for orphan in &result.pending_orphans {
            println!(
                "   {} {} ({})",
                "-".yellow(),
                orphan.relative_path.cyan(),
                orphan.target_id.dimmed()
            );
        }
    }

    if !result.shared_orphans.is_empty() {
        println!();
        println!(
            "{} {} document(s) exist only in the shared root:",
            "SHARED".yellow().bold(),
            result.shared_orphans.len()
        );
        for orphan in &result.shared_orphans {
            println!("   {} {}/{}", "-".yellow(), orphan.category, orphan.name.cyan());
        }
    }

    if !result.divergences.is_empty() {
        println!();
        println!(
            "{} {} document(s) differ from the shared root:",
            "DIVERGED".red().bold(),
            result.divergences.len()
        );
        for record in &result.divergences {
            println!(
                "   {} {}/{} {} {}",
                "!".red(),
                record.category,
                record.name.cyan(),
                record.direction.to_string().bold(),
                timestamps(record).dimmed()
            );
        }
    }

    if !result.errors.is_empty() {
        println!();
        println!("{} {} error(s):", "ERRORS".red().bold(), result.errors.len());
        for error in &result.errors {
            println!("   {} {}", "!".red(), error);
        }
    }
}

fn print_actions(result: &SyncRunResult) {
    for action in &result.actions {
        println!("   {} {}", "+".green(), action);
    }
}

fn timestamps(record: &DivergenceRecord) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    let local = record.local_modified.map(|t| t.format(FORMAT).to_string());
    let shared = record.shared_modified.map(|t| t.format(FORMAT).to_string());
    format!(
        "(local {}, shared {})",
        local.as_deref().unwrap_or("?"),
        shared.as_deref().unwrap_or("?")
    )
}

/// Ask about each reported item and apply the answers.
///
/// Returns true when a local document was replaced, so destinations need
/// another pass.
fn resolve_interactively(result: &SyncRunResult) -> Result<bool> {
    if result.is_clean() {
        return Ok(false);
    }
    if !interactive::is_interactive() {
        println!();
        println!(
            "Not a terminal; nothing was changed. Re-run {} interactively, or with {} to remove orphans.",
            "ai-toolkit sync".cyan(),
            "--yes".cyan()
        );
        return Ok(false);
    }

    let mut local_changed = false;
    println!();

    for record in &result.divergences {
        let (prompt, resolution) = match record.direction {
            Direction::LocalNewer => (
                format!(
                    "{}/{}: local is newer. Update shared copy?",
                    record.category, record.name
                ),
                Resolution::KeepLocal,
            ),
            Direction::SharedNewer => (
                format!(
                    "{}/{}: shared copy is newer. Update local?",
                    record.category, record.name
                ),
                Resolution::KeepShared,
            ),
        };
        if interactive::confirm(&prompt)? == Some(true) {
            report(apply_divergence(record, resolution));
            local_changed |= resolution == Resolution::KeepShared;
        }
    }

    for orphan in &result.shared_orphans {
        let prompt = format!(
            "{}/{} exists only in the shared root. Remove it from the shared root?",
            orphan.category, orphan.name
        );
        if interactive::confirm(&prompt)? == Some(true) {
            report(remove_shared_orphan(orphan));
        }
    }

    for orphan in &result.pending_orphans {
        let prompt = format!(
            "{} ({}) is no longer produced. Remove?",
            orphan.relative_path, orphan.target_id
        );
        if interactive::confirm(&prompt)? == Some(true) {
            report(remove_orphan(orphan));
        }
    }

    Ok(local_changed)
}

fn report(outcome: toolkit_core::Result<()>) {
    if let Err(e) = outcome {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }
}
