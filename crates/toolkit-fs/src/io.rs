//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::time::SystemTime;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// Parent directories are created as needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all());
    let _ = FileExt::unlock(&temp_file);
    drop(temp_file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    fs::rename(&temp_path, &native_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(&native_path, e)
    })
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Read only the first line of a file, without its line terminator.
///
/// Returns `Ok(None)` for an empty file.
pub fn read_first_line(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    let file = File::open(&native_path).map_err(|e| Error::io(&native_path, e))?;
    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| Error::io(&native_path, e))?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}

/// Whether the file's first line is exactly `marker`.
///
/// Unreadable or non-UTF-8 files are treated as unmarked.
pub fn has_marker_line(path: &NormalizedPath, marker: &str) -> bool {
    matches!(read_first_line(path), Ok(Some(line)) if line == marker)
}

/// Remove a file only if it still starts with `marker`.
///
/// The marker is checked immediately before deletion so a file whose
/// content was replaced by hand since it was last scanned survives.
pub fn remove_if_marked(path: &NormalizedPath, marker: &str) -> Result<()> {
    if !has_marker_line(path, marker) {
        return Err(Error::NotManaged {
            path: path.to_native(),
        });
    }
    remove_file(path)
}

pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::remove_file(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Copy `from` over `to` atomically, creating parent directories.
pub fn copy_file(from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
    let native_from = from.to_native();
    let bytes = fs::read(&native_from).map_err(|e| Error::io(&native_from, e))?;
    write_atomic(to, &bytes)
}

/// Last modification time of a file.
pub fn modified_time(path: &NormalizedPath) -> Result<SystemTime> {
    let native_path = path.to_native();
    fs::metadata(&native_path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::io(&native_path, e))
}

/// Remove empty directories from `start` upwards, stopping before `stop_at`.
///
/// Stops at the first directory that is not empty or cannot be removed.
pub fn prune_empty_dirs(start: &NormalizedPath, stop_at: &NormalizedPath) {
    let mut current = Some(start.clone());
    while let Some(dir) = current {
        if dir == *stop_at || dir.strip_prefix(stop_at).is_none() {
            break;
        }
        let is_empty = fs::read_dir(dir.to_native())
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !is_empty || fs::remove_dir(dir.to_native()).is_err() {
            break;
        }
        tracing::debug!(dir = %dir, "Pruned empty directory");
        current = dir.parent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_line_strips_crlf() {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("a.md"));
        fs::write(path.to_native(), "marker\r\nbody").unwrap();

        assert_eq!(read_first_line(&path).unwrap().as_deref(), Some("marker"));
    }

    #[test]
    fn first_line_of_empty_file_is_none() {
        let dir = tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("a.md"));
        fs::write(path.to_native(), "").unwrap();

        assert_eq!(read_first_line(&path).unwrap(), None);
    }

    #[test]
    fn prune_stops_at_boundary() {
        let dir = tempdir().unwrap();
        let root = NormalizedPath::new(dir.path());
        let leaf = root.join("skills/a/b");
        fs::create_dir_all(leaf.to_native()).unwrap();

        prune_empty_dirs(&leaf, &root.join("skills"));

        assert!(!root.join("skills/a").exists());
        assert!(root.join("skills").exists());
    }

    #[test]
    fn prune_keeps_non_empty_dirs() {
        let dir = tempdir().unwrap();
        let root = NormalizedPath::new(dir.path());
        fs::create_dir_all(root.join("skills/a/b").to_native()).unwrap();
        fs::write(root.join("skills/a/keep.md").to_native(), "x").unwrap();

        prune_empty_dirs(&root.join("skills/a/b"), &root.join("skills"));

        assert!(!root.join("skills/a/b").exists());
        assert!(root.join("skills/a/keep.md").exists());
    }
}
