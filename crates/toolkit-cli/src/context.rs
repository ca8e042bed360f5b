//! Project root detection
//!
//! Commands work from any directory inside a project, the way git does:
//! the nearest ancestor holding `ai-toolkit.yaml` is the project root.

use std::path::{Path, PathBuf};

use toolkit_fs::ToolkitPath;

use crate::error::{CliError, Result};

/// Walk up from `start` to the first directory with a configuration file.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        ToolkitPath::config_files()
            .iter()
            .any(|name| dir.join(name.as_str()).is_file())
            .then(|| dir.to_path_buf())
    })
}

/// The root given with `--root`, or the detected project root.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    find_project_root(&cwd).ok_or_else(|| {
        CliError::user(format!(
            "No {} found in {} or any parent directory",
            ToolkitPath::ConfigFile,
            cwd.display()
        ))
    })
}

/// The root given with `--root`, or the current directory.
///
/// Used by commands that operate on many projects below a directory.
pub fn resolve_base(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
