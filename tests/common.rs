#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slg() -> Command {
    cargo_bin_cmd!("sitelogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitelogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and seed one record per entity, the way a day on site
/// would be recorded: project, daily log, worker, task.
pub fn seed_site(db_path: &str) {
    slg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            db_path,
            "add-project",
            "--name",
            "Riverside Tower",
            "--location",
            "Lagos",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-06-30",
        ])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            db_path,
            "add-daily-log",
            "--date",
            "2024-01-02",
            "--weather",
            "Sunny",
            "--summary",
            "Poured foundation",
            "--project-id",
            "1",
        ])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            db_path,
            "add-worker",
            "--name",
            "A. Musa",
            "--role",
            "Electrician",
            "--project-id",
            "1",
        ])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            db_path,
            "add-task",
            "--description",
            "Wire ground floor",
            "--hours",
            "6",
            "--status",
            "pending",
            "--log-id",
            "1",
            "--worker-id",
            "1",
        ])
        .assert()
        .success();
}
