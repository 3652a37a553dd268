use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("infoverify")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("--route"));
}

#[test]
fn test_session_help_shows_status() {
    cargo_bin_cmd!("infoverify")
        .args(["session", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_unknown_subcommand_fails() {
    cargo_bin_cmd!("infoverify")
        .arg("frobnicate")
        .assert()
        .failure();
}
