#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SECRET: &str = "TESTSECRET";

pub fn tk() -> Command {
    cargo_bin_cmd!("timekeeper")
}

/// Create a unique, isolated home dir inside the system temp dir so no test
/// reads or writes the real user configuration.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timekeeper_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

/// Create a unique report directory path and remove any leftover from a
/// previous run (sealed files are read-only, so lift that first).
pub fn setup_log_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timekeeper_logs", name));
    if path.exists() {
        for entry in fs::read_dir(&path).unwrap().flatten() {
            if let Ok(meta) = entry.metadata() {
                let mut perms = meta.permissions();
                perms.set_readonly(false);
                fs::set_permissions(entry.path(), perms).ok();
            }
        }
        fs::remove_dir_all(&path).unwrap();
    }
    path.to_string_lossy().to_string()
}

/// Path of today's report inside `dir` (one file per calendar day).
pub fn todays_report(dir: &str) -> PathBuf {
    let name = chrono::Local::now().format("%d_%m_%Y").to_string();
    PathBuf::from(dir).join(format!("{name}.pdf"))
}

/// Run a full session feeding `input` on stdin, isolated from the real
/// config and from the network.
pub fn run_session(name: &str, input: &str) -> (String, assert_cmd::assert::Assert) {
    let home = setup_home(name);
    let log_dir = setup_log_dir(name);

    let assert = tk()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--log-dir", &log_dir, "--secret", SECRET, "--offline", "start"])
        .write_stdin(input.to_string())
        .assert();

    (log_dir, assert)
}
