//! Smoke tests to verify command wiring against real lineup folders

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_entry(root: &Path, name: &str, meta: Option<&str>) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(meta) = meta {
        fs::write(dir.join("code.json"), meta).unwrap();
    }
}

fn lineupctl() -> Command {
    Command::cargo_bin("lineupctl").unwrap()
}

// === Help wiring ===

#[test]
fn test_list_help() {
    lineupctl()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source roots in priority order"));
}

#[test]
fn test_copy_help() {
    lineupctl()
        .args(["copy", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("global index or folder name"));
}

#[test]
fn test_open_help() {
    lineupctl()
        .args(["open", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference URL"));
}

// === Catalog commands ===

#[test]
fn test_list_names_only_puts_override_root_first() {
    let override_root = TempDir::new().unwrap();
    let bundled_root = TempDir::new().unwrap();
    // Alphabetically the bundled entry would sort first; priority order
    // must win regardless.
    write_entry(override_root.path(), "zephyr", None);
    write_entry(bundled_root.path(), "aurora", None);

    lineupctl()
        .args(["list", "--format", "names-only"])
        .arg("-r")
        .arg(override_root.path())
        .arg("-r")
        .arg(bundled_root.path())
        .assert()
        .success()
        .stdout(predicate::eq("zephyr\naurora\n"));
}

#[test]
fn test_list_json_exposes_entry_fields() {
    let root = TempDir::new().unwrap();
    write_entry(
        root.path(),
        "dragon-luna",
        Some(r#"{"code": "abc123", "url": "https://guide.example/7"}"#),
    );

    lineupctl()
        .args(["list", "--format", "json"])
        .arg("-r")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"share_code\": \"abc123\""))
        .stdout(predicate::str::contains("\"source_rank\": 0"));
}

#[test]
fn test_list_rejects_unknown_format() {
    let root = TempDir::new().unwrap();
    lineupctl()
        .args(["list", "--format", "xml"])
        .arg("-r")
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_list_with_no_roots_reports_empty_catalog() {
    let cwd = TempDir::new().unwrap();
    lineupctl()
        .arg("list")
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No lineup entries found."));
}

#[test]
fn test_show_reports_index_cell_and_scroll_offset() {
    let override_root = TempDir::new().unwrap();
    let bundled_root = TempDir::new().unwrap();
    write_entry(override_root.path(), "first", None);
    write_entry(
        bundled_root.path(),
        "second",
        Some(r#"{"code": "abc123"}"#),
    );

    // "second" sits at global index 1: offset 1 * 200 with default height
    lineupctl()
        .args(["show", "second"])
        .arg("-r")
        .arg(override_root.path())
        .arg("-r")
        .arg(bundled_root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("global index  : 1"))
        .stdout(predicate::str::contains("row 0, col 1"))
        .stdout(predicate::str::contains("scroll offset : 200"))
        .stdout(predicate::str::contains("abc123"));
}

#[test]
fn test_show_unknown_entry_fails() {
    let root = TempDir::new().unwrap();
    lineupctl()
        .args(["show", "missing"])
        .arg("-r")
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry named 'missing'"));
}

#[test]
fn test_grid_with_width_one_stacks_rows() {
    let override_root = TempDir::new().unwrap();
    let bundled_root = TempDir::new().unwrap();
    write_entry(override_root.path(), "zephyr", None);
    write_entry(bundled_root.path(), "aurora", None);

    lineupctl()
        .args(["grid", "--width", "1"])
        .arg("-r")
        .arg(override_root.path())
        .arg("-r")
        .arg(bundled_root.path())
        .assert()
        .success()
        .stdout(predicate::eq("[ 0] zephyr\n[ 1] aurora\n"));
}

// === Guide and config ===

#[test]
fn test_guide_documents_the_folder_layout() {
    lineupctl()
        .arg("guide")
        .assert()
        .success()
        .stdout(predicate::str::contains("lineup.png"))
        .stdout(predicate::str::contains("code.json"));
}

#[test]
fn test_config_path_points_into_home() {
    lineupctl()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".lineupctl"));
}
