//! CLI smoke tests for the toolhub binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn toolhub(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("toolhub").expect("toolhub binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn list_shows_the_directory() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculator"))
        .stdout(predicate::str::contains("(json-formatter)"))
        .stdout(predicate::str::contains("coming soon"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .args(["list", "--category", "calculators"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Percentage Calculator"))
        .stdout(predicate::str::contains("JSON Formatter").not());
}

#[test]
fn list_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .args(["list", "--category", "gadgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn open_runs_a_bound_tool() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .args(["open", "calculator", "2", "+", "2", "*", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8"));
}

#[test]
fn open_unbound_tool_renders_fallback_and_succeeds() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .args(["open", "qr-generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("isn't available yet"))
        .stderr(predicate::str::contains("Tool in development"));
}

#[test]
fn open_with_bad_input_fails_with_a_message() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .args(["open", "calculator", "1", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn wishlist_toggle_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    toolhub(&dir)
        .args(["wishlist", "toggle", "calculator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Calculator"));

    toolhub(&dir)
        .args(["wishlist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculator"))
        .stdout(predicate::str::contains("1 saved"));

    // Toggling again removes
    toolhub(&dir)
        .args(["wishlist", "toggle", "calculator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Calculator"));

    toolhub(&dir)
        .args(["wishlist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wishlist is empty"));
}

#[test]
fn wishlist_clear_empties_the_store() {
    let dir = TempDir::new().unwrap();

    toolhub(&dir)
        .args(["wishlist", "toggle", "calculator"])
        .assert()
        .success();
    toolhub(&dir)
        .args(["wishlist", "toggle", "hash-generator"])
        .assert()
        .success();

    toolhub(&dir)
        .args(["wishlist", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2"));

    toolhub(&dir)
        .args(["wishlist", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn search_finds_tools_by_description() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .args(["search", "digests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hash Generator"));
}

#[test]
fn no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    toolhub(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("toolhub --help"));
}
