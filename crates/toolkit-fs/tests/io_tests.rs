use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use toolkit_fs::{Error, NormalizedPath, io};

const MARKER: &str = "<!-- managed -->";

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join(".cursor/rules/nested/a.md");

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.md");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.md"));

    io::write_text(&path, "content").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.md");
    assert!(matches!(io::read_text(&path), Err(Error::Io { .. })));
}

#[test]
fn test_has_marker_line() {
    let temp = TempDir::new().unwrap();
    let managed = NormalizedPath::new(temp.path().join("managed.md"));
    let manual = NormalizedPath::new(temp.path().join("manual.md"));
    let buried = NormalizedPath::new(temp.path().join("buried.md"));
    fs::write(managed.to_native(), format!("{MARKER}\nbody")).unwrap();
    fs::write(manual.to_native(), "# Manual\n").unwrap();
    fs::write(buried.to_native(), format!("# Title\n{MARKER}\n")).unwrap();

    assert!(io::has_marker_line(&managed, MARKER));
    assert!(!io::has_marker_line(&manual, MARKER));
    assert!(!io::has_marker_line(&buried, MARKER));
}

#[test]
fn test_remove_if_marked_deletes_managed_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("orphan.md"));
    fs::write(path.to_native(), format!("{MARKER}\n# Orphan")).unwrap();

    io::remove_if_marked(&path, MARKER).unwrap();

    assert!(!path.exists());
}

#[test]
fn test_remove_if_marked_refuses_user_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("mine.md"));
    fs::write(path.to_native(), "# Mine").unwrap();

    let result = io::remove_if_marked(&path, MARKER);

    assert!(matches!(result, Err(Error::NotManaged { .. })));
    assert!(path.exists());
}

#[test]
fn test_copy_file_creates_parents() {
    let temp = TempDir::new().unwrap();
    let root = NormalizedPath::new(temp.path());
    let from = root.join("a.md");
    fs::write(from.to_native(), "payload").unwrap();

    io::copy_file(&from, &root.join("shared/skills/a.md")).unwrap();

    assert_eq!(fs::read_to_string(root.join("shared/skills/a.md").to_native()).unwrap(), "payload");
}
