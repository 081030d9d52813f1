#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("permanence-cli").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn init_then_plan() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("permanence.json");
    let out = dir.path().join("plan.json");

    cli(&config).arg("init").assert().success();
    cli(&config).arg("init").assert().failure();

    cli(&config)
        .args(["plan", "--out-json"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-11-01 Sat | ManagerB + MemberC"))
        .stdout(predicate::str::contains("spread: 2"));

    let plan = fs::read_to_string(&out).unwrap();
    assert!(plan.contains("\"2025-11-30\""));

    cli(&config)
        .args(["check", "--plan"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn infeasible_day_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("permanence.json");

    cli(&config).arg("init").assert().success();
    cli(&config)
        .args(["unavailable", "--name", "ManagerB", "--days", "1"])
        .assert()
        .success();

    cli(&config)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("2025-11-01"))
        .stderr(predicate::str::contains("no manager available"));
}

#[test]
fn swap_then_check_flags_nothing() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("permanence.json");
    let out = dir.path().join("plan.json");

    cli(&config).arg("init").assert().success();
    cli(&config)
        .args(["plan", "--out-json"])
        .arg(&out)
        .assert()
        .success();

    cli(&config)
        .args([
            "swap", "--date", "2025-11-01", "--person", "MemberC", "--with", "MemberD", "--plan",
        ])
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("\"MemberD\""));

    cli(&config)
        .args([
            "swap", "--date", "2025-11-08", "--person", "MemberE", "--with", "MemberC", "--plan",
        ])
        .arg(&out)
        .assert()
        .failure();

    // plan modifié à la main : doublon le 2
    let tampered = fs::read_to_string(&out).unwrap().replacen(
        "\"MemberD\"\n  ],\n  \"2025-11-08\"",
        "\"ManagerA\"\n  ],\n  \"2025-11-08\"",
        1,
    );
    fs::write(&out, tampered).unwrap();
    cli(&config)
        .args(["check", "--plan"])
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("2025-11-02 duplicate"));
}
