use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::{fad, fad_isolated, seed_history, setup_history, setup_home};

/// Config file location under a redirected home, whichever platform
/// convention applies
fn config_file_in(home: &str) -> Option<PathBuf> {
    let unix = Path::new(home).join(".fieldaid").join("fieldaid.conf");
    let windows = Path::new(home).join("fieldaid").join("fieldaid.conf");

    if unix.exists() {
        Some(unix)
    } else if windows.exists() {
        Some(windows)
    } else {
        None
    }
}

fn fad_in(home: &str) -> assert_cmd::Command {
    let mut cmd = fad();
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

// ---------------------------------------------------------------
// init
// ---------------------------------------------------------------

#[test]
fn test_init_creates_config_file() {
    let home = setup_home("init_creates");

    fad_in(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initializing fieldaid"))
        .stdout(contains("fieldaid is ready"));

    let cfg_path = config_file_in(&home).expect("config file created");
    let content = fs::read_to_string(cfg_path).unwrap();
    assert!(content.contains("latitude: 40.7128"));
    assert!(content.contains("history:"));
}

#[test]
fn test_init_test_mode_skips_config_write() {
    let home = setup_home("init_test_mode");

    fad_in(&home).args(["--test", "init"]).assert().success();

    assert!(config_file_in(&home).is_none());
}

#[test]
fn test_init_does_not_create_history_file() {
    let home = setup_home("init_no_history");
    let history = setup_history("init_no_history");

    fad_in(&home)
        .args(["--history", &history, "init"])
        .assert()
        .success()
        .stdout(contains(history.as_str()));

    // first logged event creates the file, init never does
    assert!(!Path::new(&history).exists());
}

// ---------------------------------------------------------------
// config
// ---------------------------------------------------------------

#[test]
fn test_config_print_shows_defaults() {
    fad_isolated()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("latitude: 40.7128"))
        .stdout(contains("longitude: -74.006"))
        .stdout(contains("max_delta_t: 60.0"));
}

#[test]
fn test_config_check_missing_then_valid() {
    let home = setup_home("config_check");

    fad_in(&home)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("missing config file"));

    fad_in(&home).arg("init").assert().success();

    fad_in(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("is valid"));
}

// ---------------------------------------------------------------
// log
// ---------------------------------------------------------------

#[test]
fn test_log_without_history_file() {
    let history = setup_history("log_missing");

    fad_isolated()
        .args(["--history", &history, "log"])
        .assert()
        .success()
        .stdout(contains("No job history yet"));
}

#[test]
fn test_log_json_without_history_file() {
    let history = setup_history("log_json_missing");

    fad_isolated()
        .args(["--history", &history, "log", "--json"])
        .assert()
        .success()
        .stdout(contains("[]"));
}

#[test]
fn test_log_shows_default_tail_of_five() {
    let history = setup_history("log_tail_default");
    seed_history(&history, 7);

    fad_isolated()
        .args(["--history", &history, "log"])
        .assert()
        .success()
        .stdout(contains("(5 of 7 events)"))
        .stdout(contains("09:06:00"))
        .stdout(contains("09:02:00"))
        .stdout(contains("09:01:00").not());
}

#[test]
fn test_log_tail_override() {
    let history = setup_history("log_tail_override");
    seed_history(&history, 7);

    fad_isolated()
        .args(["--history", &history, "log", "--tail", "2"])
        .assert()
        .success()
        .stdout(contains("(2 of 7 events)"))
        .stdout(contains("09:05:00"))
        .stdout(contains("09:06:00"))
        .stdout(contains("09:04:00").not());
}

#[test]
fn test_log_all_rows() {
    let history = setup_history("log_all");
    seed_history(&history, 7);

    fad_isolated()
        .args(["--history", &history, "log", "--all"])
        .assert()
        .success()
        .stdout(contains("(7 of 7 events)"))
        .stdout(contains("09:00:00"))
        .stdout(contains("09:06:00"));
}

#[test]
fn test_log_json_structure() {
    let history = setup_history("log_json");
    seed_history(&history, 2);

    fad_isolated()
        .args(["--history", &history, "log", "--json"])
        .assert()
        .success()
        .stdout(contains("\"timestamp\": \"2024-01-01 09:00:00\""))
        .stdout(contains("\"status\": \"START\""))
        .stdout(contains("\"status\": \"END\""))
        .stdout(contains("\"latitude\": 40.7128"))
        .stdout(contains("\"longitude\": -74.006"));
}

#[test]
fn test_log_rejects_malformed_history() {
    let history = setup_history("log_malformed");

    fs::write(
        &history,
        "Timestamp,Status,Latitude,Longitude\nnot-a-date,START,40.7128,-74.006\n",
    )
    .unwrap();

    fad_isolated()
        .args(["--history", &history, "log"])
        .assert()
        .failure()
        .stderr(contains("line 2"));
}

// ---------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------

#[test]
fn test_bare_invocation_opens_console() {
    let history = setup_history("dispatch_default");

    fad_isolated()
        .args(["--history", &history])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(contains("Repair Tech Assistant"));
}

#[test]
fn test_console_subcommand_opens_console() {
    let history = setup_history("dispatch_console");

    fad_isolated()
        .args(["--history", &history, "console"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(contains("Repair Tech Assistant"));
}
