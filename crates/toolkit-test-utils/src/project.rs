//! [`TestProject`] builder for sync scenarios.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temporary workspace holding a project directory and a sibling shared
/// root, with helpers for setup and assertion.
///
/// ```text
/// <tmp>/project/        root()
/// <tmp>/project/.ai-content/
/// <tmp>/shared/         shared_root(), reachable from the project as "../shared"
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use toolkit_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.with_config("editors:\n  cursor: true\n");
/// project.write_content("rules/a.md", "X");
/// project.assert_file_exists(".ai-content/rules/a.md");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create the project and shared directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        fs::create_dir_all(temp_dir.path().join("shared")).unwrap();
        Self { temp_dir }
    }

    /// Root of the project.
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// Root of the shared content tree.
    pub fn shared_root(&self) -> PathBuf {
        self.temp_dir.path().join("shared")
    }

    /// The temporary directory containing both roots.
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `ai-toolkit.yaml`.
    pub fn with_config(&self, yaml: &str) -> &Self {
        self.write("ai-toolkit.yaml", yaml)
    }

    /// Write `ai-toolkit.yaml` enabling `editors` with `../shared` as the
    /// only local content source.
    pub fn with_shared_config(&self, editors: &[&str]) -> &Self {
        let mut yaml = String::from("editors:\n");
        for editor in editors {
            yaml.push_str(&format!("  {editor}: true\n"));
        }
        yaml.push_str("content_sources:\n  - type: local\n    path: ../shared\n");
        self.with_config(&yaml)
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> &Self {
        write_file(&self.path(rel), content);
        self
    }

    /// Write a document below `.ai-content/` (e.g. `rules/a.md`).
    pub fn write_content(&self, rel: &str, content: &str) -> &Self {
        self.write(&format!(".ai-content/{rel}"), content)
    }

    /// Write a document below the shared root (e.g. `skills/b.md`).
    pub fn write_shared(&self, rel: &str, content: &str) -> &Self {
        write_file(&self.shared_root().join(rel), content);
        self
    }

    /// Read a file relative to the project root.
    pub fn read(&self, rel: &str) -> String {
        read_file(&self.path(rel))
    }

    /// Read a file relative to the shared root.
    pub fn read_shared(&self, rel: &str) -> String {
        read_file(&self.shared_root().join(rel))
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path(rel)).unwrap();
    }

    /// Set the modification time of `path`.
    pub fn set_modified(path: &Path, time: SystemTime) {
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(time).unwrap();
    }

    /// Set the modification time of `path` to `age` before now.
    pub fn set_age(path: &Path, age: Duration) {
        Self::set_modified(path, SystemTime::now() - age);
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` (relative to the project root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(rel).display(),
            content,
            file_content
        );
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
}
