//! Binary-level CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_tool() {
    Command::cargo_bin("sf")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("developer-ready specification"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("sf").unwrap().arg("--version").assert().success();
}

#[test]
fn test_idea_and_file_conflict() {
    Command::cargo_bin("sf")
        .unwrap()
        .args(["a todo app", "--file", "idea.txt"])
        .assert()
        .failure();
}
