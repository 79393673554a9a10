#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use worklog::models::{Record, RecordId};
use worklog::ui::Terminal;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique data file path inside the system temp dir and remove any
/// leftover data, backup or log file from a previous run.
pub fn setup_data_file(name: &str) -> String {
    let dir = env::temp_dir();
    for suffix in [".csv", ".backup.csv", ".log"] {
        fs::remove_file(dir.join(format!("{name}_worklog{suffix}"))).ok();
    }
    dir.join(format!("{name}_worklog.csv"))
        .to_string_lossy()
        .to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn rec(id: usize, date: &str, task: &str, mins: u32, notes: &str) -> Record {
    Record::new(RecordId(id), date, task, mins, notes)
}

/// The two-record collection used throughout the tests.
pub fn sample() -> Vec<Record> {
    vec![
        rec(1, "01/01/2020", "Write", 30, ""),
        rec(2, "01/02/2020", "Read", 10, ""),
    ]
}

pub fn scripted(input: &str) -> Terminal<&[u8], Vec<u8>> {
    Terminal::new(input.as_bytes(), Vec::new())
}

pub fn output(term: Terminal<&[u8], Vec<u8>>) -> String {
    String::from_utf8_lossy(&term.into_output()).to_string()
}

/// Add a session through the CLI.
pub fn add(data: &str, date: &str, task: &str, minutes: &str, notes: &str) {
    wl().args([
        "--data", data, "--test", "add", "--task", task, "--minutes", minutes, "--date", date,
        "--notes", notes,
    ])
    .assert()
    .success();
}
