use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bks, fixtures_dir, temp_data_dir};

#[test]
fn test_stats_table_output() {
    let data = fixtures_dir();

    bks()
        .args(["--data-dir", &data, "stats", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains("12 trips selected"))
        .stdout(contains("The most common month: June"))
        .stdout(contains(
            "The most common trip: Clark St & Elm St to State St & Harrison St (4 trips)",
        ))
        .stdout(contains("Mean travel time: 841.67 s"))
        .stdout(contains("Most common birth: 1985 (4 trips)"));
}

#[test]
fn test_stats_with_filters() {
    let data = fixtures_dir();

    bks()
        .args([
            "--data-dir",
            &data,
            "stats",
            "--city",
            "chicago",
            "--month",
            "June",
            "--day",
            "monday",
        ])
        .assert()
        .success()
        .stdout(contains("3 trips selected"))
        .stdout(contains("Total travel time: 1590 s"))
        .stdout(contains("The most common start hour: 17:00"));
}

#[test]
fn test_stats_json_output() {
    let data = fixtures_dir();

    let output = bks()
        .args([
            "--data-dir",
            &data,
            "stats",
            "--city",
            "new_york_city",
            "--format",
            "json",
        ])
        .output()
        .expect("run bikeshare");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["city"], "new york city");
    assert_eq!(json["trips"], 6);
    assert_eq!(json["trip_duration"]["mean_duration"], 807.0);
}

#[test]
fn test_stats_washington_has_no_demographics() {
    let data = fixtures_dir();

    bks()
        .args(["--data-dir", &data, "stats", "--city", "washington"])
        .assert()
        .success()
        .stdout(contains("doesn't contain gender/year of birth information"))
        .stdout(contains("Gender counts").not());
}

#[test]
fn test_stats_empty_selection_is_not_an_error() {
    let data = fixtures_dir();

    bks()
        .args([
            "--data-dir", &data, "stats", "--city", "chicago", "--month", "june", "--day",
            "wednesday",
        ])
        .assert()
        .success()
        .stdout(contains("No trips match this filter combination"));
}

#[test]
fn test_stats_rejects_unknown_city_and_month() {
    let data = fixtures_dir();

    bks()
        .args(["--data-dir", &data, "stats", "--city", "boston"])
        .assert()
        .failure()
        .stderr(contains("unknown city 'boston'"));

    bks()
        .args(["--data-dir", &data, "stats", "--city", "chicago", "--month", "july"])
        .assert()
        .failure()
        .stderr(contains("unknown month 'july'"));
}

#[test]
fn test_stats_missing_data_file_fails() {
    let dir = temp_data_dir("cli_missing");
    let dir = dir.to_string_lossy().to_string();

    bks()
        .args(["--data-dir", &dir, "stats", "--city", "chicago"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Data source for chicago is unavailable"));
}

#[test]
fn test_rows_pages() {
    let data = fixtures_dir();

    bks()
        .args(["--data-dir", &data, "rows", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains("2017-01-02 08:10:00"))
        .stdout(contains("2017-06-12 08:20:00").not());

    bks()
        .args(["--data-dir", &data, "rows", "--city", "chicago", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("2017-06-12 08:20:00"))
        .stdout(contains("2017-05-01 07:55:00"));

    bks()
        .args(["--data-dir", &data, "rows", "--city", "chicago", "--page", "3"])
        .assert()
        .success()
        .stdout(contains("No more rows to display"));
}

#[test]
fn test_interactive_session_from_stdin() {
    let data = fixtures_dir();

    bks()
        .args(["--data-dir", &data])
        .write_stdin("washington\nall\nsaturday\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Please specify the city"))
        .stdout(contains("2 trips selected"))
        .stdout(contains("Yuma St & Tenley Circle NW"))
        .stdout(contains("Would you like to restart?"));
}

#[test]
fn test_config_print() {
    bks()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_dir"))
        .stdout(contains("show_timing"));
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    bks()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));
}

#[test]
fn test_config_edit_fails_when_no_editor_runs() {
    let home = temp_data_dir("cli_edit_home");

    bks()
        .env("HOME", &home)
        .env("EDITOR", "/nonexistent/editor-a")
        .env_remove("VISUAL")
        .args(["config", "--edit", "--editor", "/nonexistent/editor-b"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to edit"))
        .stderr(contains("/nonexistent/editor-a"));
}
