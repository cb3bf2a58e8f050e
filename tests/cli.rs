use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path()).env_remove("POMO_LOG");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo").and(predicate::str::contains("config.yaml")));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 15"))
        .stdout(predicate::str::contains("\"break_minutes\": 5"));
}

#[test]
fn test_config_set_then_show() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "set", "--work", "25", "--break", "10", "-o", "json"])
        .assert()
        .success();

    assert!(home.path().join(".pomo").join("config.yaml").exists());

    pomo(&home)
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 25"))
        .stdout(predicate::str::contains("\"break_minutes\": 10"));
}

#[test]
fn test_default_output_from_config() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "set", "--default-output", "json"])
        .assert()
        .success();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"config\""));
}

#[test]
fn test_config_set_requires_an_option() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn test_config_set_rejects_bad_log_level() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "set", "--log-level", "chatty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown log level"));
}

#[test]
fn test_config_set_rejects_empty_and_numeric_log_level() {
    let home = TempDir::new().unwrap();
    for level in ["", "5"] {
        pomo(&home)
            .args(["config", "set", "--log-level", level])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown log level"));
    }
    assert!(!home.path().join(".pomo").join("config.yaml").exists());
}

#[test]
fn test_config_reset_repairs_broken_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".pomo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "timer: [not, a, map]\n").unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));

    pomo(&home).args(["config", "reset"]).assert().success();

    pomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 15"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn test_rejects_unknown_command() {
    let home = TempDir::new().unwrap();
    pomo(&home).arg("frobnicate").assert().failure();
}
