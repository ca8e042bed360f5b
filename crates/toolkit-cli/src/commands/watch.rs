//! Watch command implementation
//!
//! Re-runs the sync whenever the configuration or anything under
//! `.ai-content/` changes. Bursts of events are collapsed into one pass,
//! and passes run on this thread only, so they never overlap.

use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use colored::Colorize;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use toolkit_core::{SyncEngine, SyncOptions};
use toolkit_fs::{NormalizedPath, ToolkitPath};

use super::sync::print_summary;
use crate::error::Result;

/// Quiet period after the last change before a pass starts
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Run the watch command
pub fn run_watch(path: &Path) -> Result<()> {
    let root = NormalizedPath::new(path).canonicalize()?.to_native();
    let content_root = root.join(ToolkitPath::ContentDir.as_str());

    sync_once(&root);

    let (tx, rx) = mpsc::channel();
    let filter_root = content_root.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if let Ok(event) = res
                && is_relevant(&event, &filter_root)
            {
                let _ = tx.send(());
            }
        },
        Config::default(),
    )?;

    // The root itself is watched shallowly to see config edits and the
    // creation of .ai-content
    watcher.watch(&root, RecursiveMode::NonRecursive)?;
    if content_root.is_dir() {
        watcher.watch(&content_root, RecursiveMode::Recursive)?;
    }

    println!();
    println!(
        "{} Watching {} (Ctrl+C to stop)",
        "=>".blue().bold(),
        root.display()
    );

    let mut content_watched = content_root.is_dir();
    while rx.recv().is_ok() {
        // Wait for the burst to settle
        loop {
            match rx.recv_timeout(DEBOUNCE) {
                Ok(()) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        if !content_watched && content_root.is_dir() {
            watcher.watch(&content_root, RecursiveMode::Recursive)?;
            content_watched = true;
        }

        println!();
        println!("{} Change detected", "=>".blue().bold());
        sync_once(&root);
    }

    Ok(())
}

/// One non-interactive pass; failures are printed, never fatal.
fn sync_once(root: &Path) {
    let outcome = SyncEngine::load(NormalizedPath::new(root))
        .and_then(|engine| engine.run(&SyncOptions::default()));
    match outcome {
        Ok(result) => print_summary(&result),
        Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
    }
}

fn is_relevant(event: &Event, content_root: &Path) -> bool {
    if event.kind.is_access() {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| path.starts_with(content_root) || is_config_file(path))
}

fn is_config_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str());
    ToolkitPath::config_files()
        .iter()
        .any(|config| name == Some(config.as_str()))
}
