#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fad() -> Command {
    cargo_bin_cmd!("fieldaid")
}

/// Command with HOME/APPDATA redirected to the system temp dir so a real
/// user config never leaks into the test
pub fn fad_isolated() -> Command {
    let mut cmd = fad();
    cmd.env("HOME", env::temp_dir());
    cmd.env("APPDATA", env::temp_dir());
    cmd
}

/// Create a unique history file path inside the system temp dir and remove any existing file
pub fn setup_history(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fieldaid_history.csv", name));
    let history_path = path.to_string_lossy().to_string();
    fs::remove_file(&history_path).ok();
    history_path
}

/// Create a unique, empty config home for init/config tests
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fieldaid_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Run one console session against the given history file, feeding
/// `script` on stdin, and return the assert handle
pub fn console_session(history: &str, script: &str) -> assert_cmd::assert::Assert {
    fad_isolated()
        .args(["--history", history])
        .write_stdin(script)
        .assert()
}

/// Append `n` alternating START/END events dated 2024-01-01, one minute
/// apart starting at 09:00, directly through the library
pub fn seed_history(path: &str, n: u32) {
    use fieldaid::history::append_record;
    use fieldaid::models::job_event::JobEvent;
    use fieldaid::models::job_status::JobStatus;
    use fieldaid::models::position::Position;
    use std::path::Path;

    let pos = Position::new(40.7128, -74.0060);
    for i in 0..n {
        let status = if i % 2 == 0 {
            JobStatus::Start
        } else {
            JobStatus::End
        };
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .expect("valid date")
            .and_hms_opt(9, i, 0)
            .expect("valid time");
        append_record(Path::new(path), &JobEvent::new(ts, status, pos)).expect("seed event");
    }
}
