//! Monorepo project discovery

use std::fs;

use toolkit_fs::{Error as FsError, NormalizedPath, ToolkitPath};

use crate::Result;
use crate::config::ToolkitConfig;

/// Every directory at or below `root` that holds an `ai-toolkit.yaml`.
///
/// `node_modules` and hidden directories (`.git` included) are not
/// descended into. Results are sorted.
pub fn discover_projects(root: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let mut projects = Vec::new();
    visit(root, &mut projects)?;
    projects.sort();
    Ok(projects)
}

fn visit(dir: &NormalizedPath, projects: &mut Vec<NormalizedPath>) -> Result<()> {
    if ToolkitConfig::find(dir).is_some() {
        projects.push(dir.clone());
    }

    let native = dir.to_native();
    let entries = fs::read_dir(&native).map_err(|e| FsError::io(&native, e))?;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || name == ToolkitPath::NodeModulesDir.as_str() {
            continue;
        }
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            visit(&dir.join(&name), projects)?;
        }
    }
    Ok(())
}
