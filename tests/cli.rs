//! Integration tests for the non-interactive commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget-tracker").unwrap();
    cmd.env("BUDGET_TRACKER_DIR", dir.path());
    cmd
}

#[test]
fn test_summary_shows_default_seed() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Bills"))
        .stdout(predicate::str::contains("Subscriptions"))
        .stdout(predicate::str::contains("Overflow"))
        .stdout(predicate::str::contains("$10000.00"));
}

#[test]
fn test_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));

    assert!(dir.path().join("config.json").exists());

    tracker(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().display().to_string();

    tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(base))
        .stdout(predicate::str::contains("activity.log"));
}

#[test]
fn test_summary_reflects_seeded_items() {
    let dir = TempDir::new().unwrap();
    let settings = r#"{
        "total_earned": 500000,
        "budgets": [
            {
                "name": "Monthly Bills",
                "items": [
                    { "name": "Rent", "amount": "1200" },
                    { "name": "Internet", "amount": "60", "is_automatic": true, "frequency": "monthly" }
                ]
            },
            { "name": "Savings" }
        ]
    }"#;
    std::fs::write(dir.path().join("config.json"), settings).unwrap();

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Internet"))
        .stdout(predicate::str::contains("$1260.00"))
        .stdout(predicate::str::contains("$3740.00"));
}

#[test]
fn test_summary_unknown_budget_fails() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["summary", "--budget", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Groceries"));
}

#[test]
fn test_log_without_activity() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["log", "--count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity recorded."));
}

#[test]
fn test_invalid_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    tracker(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings"));
}
