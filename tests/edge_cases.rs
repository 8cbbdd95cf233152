//! Edge case and error handling tests for seedmd

mod harness;

use assert_cmd::Command;
use harness::{TestTree, run_seedmd};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn seedmd(tree: &TestTree) -> Command {
    let mut cmd = Command::cargo_bin("seedmd").expect("binary should be built");
    cmd.current_dir(tree.path());
    cmd
}

// ============================================================================
// Filesystem shape
// ============================================================================

#[test]
fn test_file_where_package_dir_expected() {
    let tree = TestTree::new();
    tree.add_file("src/main/java/com/dnikulin/vijil/lexer", "a file, not a dir");

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "lexer"]);
    assert!(success);
    assert_eq!(stdout, "\n", "a plain file is treated as missing");
}

#[test]
fn test_file_where_language_dir_expected() {
    let tree = TestTree::new();
    tree.add_file("src/main/java", "blocks the whole java tree");

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "lexer"]);
    assert!(success);
    assert_eq!(stdout, "\n");
}

#[test]
fn test_subdirectories_not_listed() {
    let tree = TestTree::new();
    tree.add_source("Java", "index", "Mindex.java");
    tree.add_file("src/main/java/com/dnikulin/vijil/index/inner/Deep.java", "");
    fs::create_dir_all(tree.package_dir("Java", "index").join("Odd.java")).unwrap();

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "index"]);
    assert!(success);
    assert!(stdout.contains("Mindex.java"));
    assert!(!stdout.contains("Deep.java"), "no recursion: {}", stdout);
    assert!(!stdout.contains("Odd.java"), "directories skipped: {}", stdout);
}

#[test]
fn test_symlink_to_file_is_listed() {
    let tree = TestTree::new();
    let target = tree.add_file("shared/Hash.java", "");
    let dir = tree.add_package("Java", "file");
    symlink(&target, dir.join("Hash.java")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "file"]);
    assert!(success);
    assert!(stdout.contains("Hash.java\n---------\n"), "{}", stdout);
}

#[test]
fn test_dangling_symlink_skipped() {
    let tree = TestTree::new();
    let dir = tree.add_package("Java", "file");
    symlink(tree.path().join("gone.java"), dir.join("Gone.java"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "file"]);
    assert!(success);
    assert!(stdout.contains("com.dnikulin.vijil.file (Java)"));
    assert!(!stdout.contains("Gone.java"));
}

#[test]
fn test_symlinked_package_dir_counts_as_existing() {
    let tree = TestTree::new();
    tree.add_file("elsewhere/Lemma.java", "");
    fs::create_dir_all(tree.path().join("src/main/java/com/dnikulin/vijil")).unwrap();
    symlink(
        tree.path().join("elsewhere"),
        tree.package_dir("Java", "parse"),
    )
    .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "parse"]);
    assert!(success);
    assert!(stdout.contains("com.dnikulin.vijil.parse (Java)"));
    assert!(stdout.contains("Lemma.java"));
}

#[test]
fn test_unicode_file_name_underline() {
    let tree = TestTree::new();
    tree.add_source("Java", "text", "Über.java");

    let (stdout, _stderr, success) = run_seedmd(tree.path(), &["-p", "text"]);
    assert!(success);
    assert!(stdout.contains("Über.java\n---------\n"), "{}", stdout);
}

#[test]
fn test_nonexistent_root() {
    let tree = TestTree::new();

    seedmd(&tree)
        .args(["does-not-exist", "-p", "lexer", "-p", "store"])
        .assert()
        .success()
        .stdout("\n\n");
}

// ============================================================================
// Permission errors
// ============================================================================

#[test]
fn test_looping_package_link_fails() {
    let tree = TestTree::new();
    fs::create_dir_all(tree.path().join("src/main/java/com/dnikulin/vijil")).unwrap();
    symlink("lexer", tree.package_dir("Java", "lexer")).expect("Failed to create symlink");

    seedmd(&tree)
        .args(["-p", "lexer"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("seedmd: cannot access"))
        .stderr(predicate::str::contains("lexer"));
}

#[test]
fn test_looping_file_link_fails() {
    let tree = TestTree::new();
    let dir = tree.add_package("Java", "model");
    symlink("Cycle.java", dir.join("Cycle.java")).expect("Failed to create symlink");

    seedmd(&tree)
        .args(["-p", "model"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("seedmd: cannot access"));
}

/// Permissions are not enforced for root; such runs skip the assertions.
fn permissions_enforced(dir: &std::path::Path) -> bool {
    fs::read_dir(dir).is_err()
}

#[test]
fn test_unreadable_package_dir_fails() {
    let tree = TestTree::new();
    let dir = tree.add_source("Java", "store", "Saver.java");
    let dir = dir.parent().unwrap().to_path_buf();
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o000)).unwrap();

    if permissions_enforced(&dir) {
        seedmd(&tree)
            .args(["-p", "store"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::starts_with("seedmd: cannot access"))
            .stderr(predicate::str::contains("store"));
    }

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_unsearchable_parent_fails() {
    let tree = TestTree::new();
    tree.add_source("Java", "report", "Report.java");
    let parent = tree.path().join("src/main/java/com/dnikulin/vijil");
    fs::set_permissions(&parent, fs::Permissions::from_mode(0o000)).unwrap();

    if permissions_enforced(&parent) {
        seedmd(&tree)
            .args(["-p", "report"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("seedmd:"));
    }

    fs::set_permissions(&parent, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_error_stops_output_for_later_packages() {
    let tree = TestTree::new();
    tree.add_source("Java", "lexer", "Lexer.java");
    let dir = tree.add_package("Java", "model");
    tree.add_source("Java", "tools", "Empty.java");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o000)).unwrap();

    if permissions_enforced(&dir) {
        seedmd(&tree)
            .args(["-p", "lexer", "-p", "model", "-p", "tools"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("lexer (Java)"))
            .stdout(predicate::str::contains("tools").not());
    }

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
}

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn test_json_conflicts_with_spaced() {
    let tree = TestTree::new();

    seedmd(&tree)
        .args(["--json", "--spaced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_color_mode() {
    let tree = TestTree::new();

    seedmd(&tree)
        .args(["--color", "sometimes"])
        .assert()
        .failure();
}
