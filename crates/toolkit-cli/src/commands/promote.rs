//! Promote command implementation

use std::path::Path;

use colored::Colorize;

use toolkit_core::{Error as CoreError, SyncEngine, promote_file};
use toolkit_fs::NormalizedPath;

use crate::error::Result;

/// Run the promote command
///
/// Copies one document from `.ai-content/` into the configured shared root.
pub fn run_promote(path: &Path, file: &str, force: bool) -> Result<()> {
    let engine = SyncEngine::load(NormalizedPath::new(path))?;
    let (shared_root, _) = engine.shared_root().ok_or(CoreError::NoSharedRoot)?;

    let written = promote_file(engine.root(), &shared_root, file, force)?;
    println!(
        "{} Promoted {} to {}",
        "OK".green().bold(),
        file.cyan(),
        written
    );
    Ok(())
}
