//! CLI integration tests using assert_cmd
//!
//! These tests run the treegen binary end-to-end against temp directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the treegen binary
fn treegen_cmd() -> Command {
    Command::cargo_bin("treegen").expect("Failed to find treegen binary")
}

fn write_tree(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("tree.txt");
    fs::write(&path, contents).expect("Failed to write tree file");
    path
}

#[test]
fn test_lone_help_is_a_usage_error() {
    treegen_cmd()
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: treegen <tree_file> <base_name> <root_directory>",
        ));
}

#[test]
fn test_lone_version_is_a_usage_error() {
    treegen_cmd()
        .arg("--version")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: treegen"));
}

#[test]
fn test_hyphen_base_name_is_data() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tree = write_tree(temp.path(), "└── users\n");
    let root = temp.path().join("out");

    treegen_cmd()
        .arg(&tree)
        .arg("-api")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("-apiUsers.java"));

    assert_eq!(
        fs::read_to_string(root.join("users").join("-apiUsers.java")).unwrap(),
        "// Auto-generated: -apiUsers.java\n"
    );
}

#[test]
fn test_flag_like_base_names_are_data() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tree = write_tree(temp.path(), "└── users\n");
    let root = temp.path().join("out");

    for base in ["-h", "--help", "--version"] {
        treegen_cmd()
            .arg(&tree)
            .arg(base)
            .arg(&root)
            .assert()
            .success()
            .stdout(predicate::str::contains("✅ Created:"));

        assert!(root.join("users").join(format!("{base}Users.java")).is_file());
    }
}

#[test]
fn test_no_arguments_prints_usage() {
    treegen_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: treegen <tree_file> <base_name> <root_directory>",
        ));
}

#[test]
fn test_too_few_arguments_prints_usage() {
    treegen_cmd()
        .arg("tree.txt")
        .arg("api")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: treegen"));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    treegen_cmd()
        .args(["tree.txt", "api", "out", "extra"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: treegen"));
}

#[test]
fn test_generates_structure() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tree = write_tree(temp.path(), "├── users\n└── orders\n");
    let root = temp.path().join("out");

    treegen_cmd()
        .arg(&tree)
        .arg("api")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created:").count(2))
        .stdout(predicate::str::contains("apiUsers.java"))
        .stdout(predicate::str::contains("apiOrders.java"));

    assert_eq!(
        fs::read_to_string(root.join("users").join("apiUsers.java")).unwrap(),
        "// Auto-generated: apiUsers.java\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("orders").join("apiOrders.java")).unwrap(),
        "// Auto-generated: apiOrders.java\n"
    );
}

#[test]
fn test_second_run_warns_and_succeeds() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tree = write_tree(temp.path(), "├── controller\n└── service\n");
    let root = temp.path().join("out");

    treegen_cmd().arg(&tree).arg("user").arg(&root).assert().success();

    let stub = root.join("controller").join("userController.java");
    fs::write(&stub, "edited by hand\n").unwrap();

    treegen_cmd()
        .arg(&tree)
        .arg("user")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("File already exists").count(2))
        .stdout(predicate::str::contains("Created").not());

    assert_eq!(fs::read_to_string(&stub).unwrap(), "edited by hand\n");
}

#[test]
fn test_tree_without_entries_creates_root_only() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tree = write_tree(temp.path(), "README.md\nsrc/\n");
    let root = temp.path().join("nested").join("root");

    treegen_cmd()
        .arg(&tree)
        .arg("api")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(root.is_dir());
}

#[test]
fn test_missing_tree_file_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    treegen_cmd()
        .arg(temp.path().join("missing.txt"))
        .arg("api")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read tree file"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_unwritable_root_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tree = write_tree(temp.path(), "└── users\n");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "a file").unwrap();

    treegen_cmd()
        .arg(&tree)
        .arg("api")
        .arg(&blocker)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create directory"));
}
