//! Argument-surface tests for the snapaudit binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_both_modes() {
    Command::cargo_bin("snapaudit")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("attached"));
}

#[test]
fn scan_help_documents_flags() {
    Command::cargo_bin("snapaudit")
        .expect("binary builds")
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--region"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    Command::cargo_bin("snapaudit")
        .expect("binary builds")
        .arg("bogus")
        .assert()
        .failure();
}
