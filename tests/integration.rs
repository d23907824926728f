use assert_cmd::Command;
use predicates::prelude::*;

fn clubstats() -> Command {
    let mut cmd = Command::cargo_bin("clubstats").expect("binary should exist");
    cmd.env_remove("RUST_LOG")
        .env("HOME", "/nonexistent/clubstats-home");
    cmd
}

#[test]
fn cli_version_flag() {
    clubstats()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clubstats"));
}

#[test]
fn cli_help_flag() {
    clubstats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Football club analytics"));
}

#[test]
fn score_requires_path() {
    clubstats()
        .args(["score", "--scorer", "duels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_requires_scorer() {
    clubstats()
        .args(["score", "stats.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--scorer"));
}

#[test]
fn score_rejects_unknown_scorer() {
    clubstats()
        .args(["score", "stats.csv", "--scorer", "possession"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn corners_requires_both_views() {
    clubstats()
        .args(["corners", "--attack", "attack.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--defense"));
}

#[test]
fn quiet_and_verbose_cannot_be_combined() {
    clubstats()
        .args(["-q", "-v", "check", "stats.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_input_exits_with_code_3() {
    let tmp = tempfile::TempDir::new().expect("temp dir should be created");
    let missing = tmp.path().join("missing.csv");
    clubstats()
        .arg("score")
        .arg(&missing)
        .args(["--scorer", "duels"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: path does not exist"));
}
