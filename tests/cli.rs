use assert_cmd::Command;
use predicates::prelude::*;

fn bankgen(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bankgen").unwrap();
    cmd.env("BANKGEN_DATA_DIR", data_dir);
    cmd
}

#[test]
fn test_read_commands_require_a_generated_dataset() {
    let dir = tempfile::tempdir().unwrap();
    bankgen(dir.path())
        .arg("users")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cached dataset"));
}

#[test]
fn test_generate_then_inspect() {
    let dir = tempfile::tempdir().unwrap();

    bankgen(dir.path())
        .args(["generate", "--seed", "42", "--months", "2", "--card-months", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset generated."))
        .stdout(predicate::str::contains("Seed:         42"));

    bankgen(dir.path())
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah Chen"))
        .stdout(predicate::str::contains("Frank Delgado"));

    bankgen(dir.path())
        .args(["accounts", "--user", "u2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Money Market"));

    bankgen(dir.path())
        .args(["transactions", "--account", "acc1", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TODAY"));
}

#[test]
fn test_generate_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    bankgen(dir.path())
        .args(["generate", "--seed", "1", "--months", "1"])
        .assert()
        .success();
    bankgen(dir.path())
        .args(["generate", "--seed", "2", "--months", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    bankgen(dir.path())
        .args(["generate", "--seed", "7", "--months", "1", "--card-months", "1"])
        .assert()
        .success();

    let out = dir.path().join("txns.csv");
    bankgen(dir.path())
        .args(["export", "--format", "csv", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("user_id,account_id"));
    assert!(text.lines().count() > 1);
}

#[test]
fn test_clear_removes_cache() {
    let dir = tempfile::tempdir().unwrap();
    bankgen(dir.path())
        .args(["generate", "--seed", "3", "--months", "1"])
        .assert()
        .success();

    bankgen(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    bankgen(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cached dataset"));
}

#[test]
fn test_unknown_account_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    bankgen(dir.path())
        .args(["generate", "--seed", "5", "--months", "1"])
        .assert()
        .success();

    bankgen(dir.path())
        .args(["transactions", "--account", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account"));
}
