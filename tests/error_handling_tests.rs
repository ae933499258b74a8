use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_test_env() -> TempDir {
    TempDir::new().unwrap()
}

fn get_ht_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ht").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env_remove("HT_DATA_FILE");
    cmd
}

#[test]
fn test_user_error_format() {
    let temp_dir = setup_test_env();

    // User errors have the "Error: " prefix, the usage reminder and exit code 1
    get_ht_cmd(&temp_dir)
        .args(["track", "2h", "NOPE"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("ht track <duration> <time_code>"))
        .stderr(predicate::str::contains("ht report -d <date> -t <type>"))
        .stderr(predicate::str::contains("ht pto"));
}

#[test]
fn test_no_command_prints_guidance() {
    let temp_dir = setup_test_env();
    get_ht_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command. Use --help for usage information."));
}

#[test]
fn test_unknown_command_rejected_by_parser() {
    let temp_dir = setup_test_env();
    get_ht_cmd(&temp_dir).arg("frobnicate").assert().failure();
}

#[test]
fn test_malformed_data_file_degrades_to_empty() {
    let temp_dir = setup_test_env();
    fs::write(temp_dir.path().join("tracked_hours.json"), "{ not json").unwrap();

    get_ht_cmd(&temp_dir)
        .arg("codes")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading tracked hours"))
        .stdout(predicate::str::contains("No time codes registered"));
}

#[test]
fn test_schema_mismatch_degrades_to_empty() {
    let temp_dir = setup_test_env();
    fs::write(
        temp_dir.path().join("tracked_hours.json"),
        r#"{"tracked_hours": {"2023-06-01": {"PTO": "lots"}}, "time_codes": ["PTO"]}"#,
    )
    .unwrap();

    get_ht_cmd(&temp_dir)
        .args(["report", "-d", "2023-06-01"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading tracked hours"))
        .stdout(predicate::str::contains("No hours tracked for 2023-06-01"));
}

#[test]
fn test_invalid_rc_value_is_user_error() {
    let temp_dir = setup_test_env();
    fs::create_dir_all(temp_dir.path().join(".ht")).unwrap();
    fs::write(temp_dir.path().join(".ht").join("rc"), "track.daily_cap_hours=many\n").unwrap();

    get_ht_cmd(&temp_dir)
        .arg("pto")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration track.daily_cap_hours on line 1"));
}

#[test]
fn test_no_command_ignores_broken_rc() {
    let temp_dir = setup_test_env();
    fs::create_dir_all(temp_dir.path().join(".ht")).unwrap();
    fs::write(temp_dir.path().join(".ht").join("rc"), "track.daily_cap_hours=many\n").unwrap();

    get_ht_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command. Use --help for usage information."));
}

#[test]
fn test_non_utf8_data_file_degrades_to_empty() {
    let temp_dir = setup_test_env();
    fs::write(
        temp_dir.path().join("tracked_hours.json"),
        b"{\"tracked_hours\":\xff\xfe}",
    )
    .unwrap();

    get_ht_cmd(&temp_dir)
        .arg("pto")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading tracked hours"))
        .stdout(predicate::str::contains("Total Working Hours: 0.00 hours"));
}

#[test]
fn test_duplicate_codes_in_file_are_listed_once() {
    let temp_dir = setup_test_env();
    fs::write(
        temp_dir.path().join("tracked_hours.json"),
        r#"{"tracked_hours": {}, "time_codes": ["A", "A"]}"#,
    )
    .unwrap();

    get_ht_cmd(&temp_dir)
        .arg("codes")
        .assert()
        .success()
        .stdout("Time codes:\n  - A\n");
}

#[test]
fn test_overflowing_stored_values_do_not_crash() {
    let temp_dir = setup_test_env();
    fs::write(
        temp_dir.path().join("tracked_hours.json"),
        r#"{"tracked_hours": {"2023-06-01": {"A": 1e19}, "2023-06-02": {"A": 1e19}}, "time_codes": ["A"]}"#,
    )
    .unwrap();

    get_ht_cmd(&temp_dir)
        .arg("pto")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PTO Report:"));
}

#[test]
fn test_write_failure_is_internal_error() {
    let temp_dir = setup_test_env();
    // A regular file where the data file's parent directory should be
    fs::write(temp_dir.path().join("blocker"), "").unwrap();

    get_ht_cmd(&temp_dir)
        .args(["--file", "blocker/hours.json", "add_code", "PTO"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::starts_with("Unexpected error: Failed to write tracked hours"));
}
