use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unknown_route_is_rejected() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("infoverify")
        .env("INFOVERIFY_HOME", dir.path())
        .args(["--route", "/nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown route: /nowhere"));
}

#[test]
fn test_ui_requires_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("infoverify")
        .env("INFOVERIFY_HOME", dir.path())
        .args(["--route", "/auth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
