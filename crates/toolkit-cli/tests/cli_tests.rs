//! Integration tests that invoke the compiled `ai-toolkit` binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const MARKER: &str = "<!-- Auto-generated by ai-toolkit. Do not edit directly. -->";

/// Get a Command for the ai-toolkit binary
fn toolkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ai-toolkit").expect("Failed to find ai-toolkit binary");
    cmd.env_remove("AI_TOOLKIT_ROOT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn project(config: &str) -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ai-toolkit.yaml").write_str(config).unwrap();
    temp
}

// ============================================================================
// Top level
// ============================================================================

#[test]
fn test_help_lists_commands() {
    toolkit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("promote"))
        .stdout(predicate::str::contains("sync-all"))
        .stdout(predicate::str::contains("list-targets"));
}

#[test]
fn test_no_command_prints_hint() {
    toolkit_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("ai-toolkit --help"));
}

// ============================================================================
// list-targets
// ============================================================================

#[test]
fn test_list_targets_shows_catalogue() {
    toolkit_cmd()
        .arg("list-targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Targets"))
        .stdout(predicate::str::contains("cursor"))
        .stdout(predicate::str::contains(".claude/skills"))
        .stdout(predicate::str::contains("SKILL.md"))
        .stdout(predicate::str::contains("20 targets"));
}

#[test]
fn test_list_targets_json() {
    let output = toolkit_cmd()
        .args(["list-targets", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let targets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = targets
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 20);
    assert!(ids.contains(&"windsurf"));
}

// ============================================================================
// sync
// ============================================================================

#[test]
fn test_sync_writes_destinations() {
    let temp = project("editors:\n  cursor: true\n  claude: true\n");
    temp.child(".ai-content/rules/style.md").write_str("Use tabs").unwrap();

    toolkit_cmd()
        .arg("sync")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced 2 file(s)"));

    temp.child(".cursor/rules/style.md")
        .assert(predicate::str::starts_with(MARKER))
        .assert(predicate::str::ends_with("Use tabs"));
    temp.child(".claude/rules/style.md").assert(predicate::path::exists());
}

#[test]
fn test_sync_from_subdirectory_finds_project_root() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/rules/style.md").write_str("X").unwrap();

    toolkit_cmd()
        .arg("sync")
        .current_dir(temp.child(".ai-content/rules").path())
        .assert()
        .success();

    temp.child(".cursor/rules/style.md").assert(predicate::path::exists());
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/rules/style.md").write_str("X").unwrap();

    toolkit_cmd()
        .args(["sync", "--dry-run"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] Would write"))
        .stdout(predicate::str::contains("Would sync 1 file(s)"));

    temp.child(".cursor").assert(predicate::path::missing());
}

#[test]
fn test_sync_without_config_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    toolkit_cmd()
        .args(["sync", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("ai-toolkit.yaml"));
}

#[test]
fn test_sync_reports_orphans_without_removing_them() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/rules/old.md").write_str("X").unwrap();
    toolkit_cmd().arg("sync").current_dir(temp.path()).assert().success();

    std::fs::remove_file(temp.child(".ai-content/rules/old.md").path()).unwrap();
    toolkit_cmd()
        .arg("sync")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ORPHANED"))
        .stdout(predicate::str::contains(".cursor/rules/old.md"));

    temp.child(".cursor/rules/old.md").assert(predicate::path::exists());
}

#[test]
fn test_sync_yes_removes_orphans() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/rules/old.md").write_str("X").unwrap();
    temp.child(".cursor/rules/mine.md").write_str("hand written").unwrap();
    toolkit_cmd().arg("sync").current_dir(temp.path()).assert().success();

    std::fs::remove_file(temp.child(".ai-content/rules/old.md").path()).unwrap();
    toolkit_cmd()
        .args(["sync", "--yes"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    temp.child(".cursor/rules/old.md").assert(predicate::path::missing());
    temp.child(".cursor/rules/mine.md").assert(predicate::path::exists());
}

#[test]
fn test_sync_json_output() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/skills/api.md").write_str("API").unwrap();

    let output = toolkit_cmd()
        .args(["sync", "--json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["written"].as_array().unwrap().len(), 1);
    assert!(result["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_sync_write_error_exits_nonzero() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/rules/style.md").write_str("X").unwrap();
    temp.child(".cursor").write_str("not a directory").unwrap();

    toolkit_cmd()
        .arg("sync")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERRORS"))
        .stderr(predicate::str::contains("1 error(s)"));
}

#[test]
fn test_sync_reports_divergence_non_interactively() {
    let temp = assert_fs::TempDir::new().unwrap();
    let project_dir = temp.child("project");
    project_dir
        .child("ai-toolkit.yaml")
        .write_str("editors:\n  cursor: true\ncontent_sources:\n  - type: local\n    path: ../shared\n")
        .unwrap();
    project_dir.child(".ai-content/rules/a.md").write_str("local").unwrap();
    temp.child("shared/rules/a.md").write_str("shared").unwrap();
    temp.child("shared/skills/b.md").write_str("B").unwrap();

    toolkit_cmd()
        .arg("sync")
        .current_dir(project_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DIVERGED"))
        .stdout(predicate::str::contains("rules/a"))
        .stdout(predicate::str::contains("SHARED"))
        .stdout(predicate::str::contains("skills/b"));

    // Nothing resolved without a terminal
    temp.child("shared/rules/a.md").assert("shared");
    project_dir.child(".ai-content/rules/a.md").assert("local");
}

// ============================================================================
// promote
// ============================================================================

#[test]
fn test_promote_copies_to_shared_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let project_dir = temp.child("project");
    project_dir
        .child("ai-toolkit.yaml")
        .write_str("content_sources:\n  - type: local\n    path: ../shared\n")
        .unwrap();
    project_dir.child(".ai-content/skills/api.md").write_str("API").unwrap();
    temp.child("shared").create_dir_all().unwrap();

    toolkit_cmd()
        .args(["promote", "skills/api.md"])
        .current_dir(project_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Promoted"));
    temp.child("shared/skills/api.md").assert("API");

    project_dir.child(".ai-content/skills/api.md").write_str("API v2").unwrap();
    toolkit_cmd()
        .args(["promote", ".ai-content/skills/api.md"])
        .current_dir(project_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    toolkit_cmd()
        .args(["promote", ".ai-content/skills/api.md", "--force"])
        .current_dir(project_dir.path())
        .assert()
        .success();
    temp.child("shared/skills/api.md").assert("API v2");
}

#[test]
fn test_promote_without_shared_root_fails() {
    let temp = project("editors:\n  cursor: true\n");
    temp.child(".ai-content/skills/api.md").write_str("API").unwrap();

    toolkit_cmd()
        .args(["promote", "skills/api.md"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No shared root"));
}

// ============================================================================
// sync-all
// ============================================================================

#[test]
fn test_sync_all_syncs_each_project() {
    let temp = assert_fs::TempDir::new().unwrap();
    for app in ["apps/web", "apps/api"] {
        let dir = temp.child(app);
        dir.child("ai-toolkit.yaml").write_str("editors:\n  cursor: true\n").unwrap();
        dir.child(".ai-content/rules/a.md").write_str(app).unwrap();
    }
    temp.child("node_modules/dep/ai-toolkit.yaml").write_str("").unwrap();

    toolkit_cmd()
        .arg("sync-all")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 project(s), 0 failed"));

    temp.child("apps/web/.cursor/rules/a.md").assert(predicate::str::ends_with("apps/web"));
    temp.child("apps/api/.cursor/rules/a.md").assert(predicate::str::ends_with("apps/api"));
    temp.child("node_modules/dep/.cursor").assert(predicate::path::missing());
}

#[test]
fn test_sync_all_without_projects_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    toolkit_cmd()
        .args(["sync-all", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No ai-toolkit.yaml found"));
}
