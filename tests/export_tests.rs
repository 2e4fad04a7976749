//! Export command coverage: CSV, JSON, path and overwrite rules.

use predicates::str::contains;
use std::fs;

mod common;
use common::{seed_site, setup_test_db, slg, temp_out};

#[test]
fn test_export_projects_csv() {
    let db_path = setup_test_db("export_projects_csv");
    seed_site(&db_path);

    let out = temp_out("projects", "csv");

    slg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--entity", "projects", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,name,location,start_date,end_date"));
    assert!(content.contains("Riverside Tower"));
    assert!(content.contains("2024-06-30"));
}

#[test]
fn test_export_tasks_json() {
    let db_path = setup_test_db("export_tasks_json");
    seed_site(&db_path);

    let out = temp_out("tasks", "json");

    slg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--entity", "tasks", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Wire ground floor"));
    assert!(content.contains("\"status\": \"pending\""));
}

#[test]
fn test_export_workers_csv_handles_unassigned() {
    let db_path = setup_test_db("export_workers_csv");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            &db_path,
            "add-worker",
            "--name",
            "B. Okoro",
            "--role",
            "Mason",
        ])
        .assert()
        .success();

    let out = temp_out("workers", "csv");

    slg()
        .args([
            "--db", &db_path, "export", "--entity", "workers", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("B. Okoro,Mason,"));
}

#[test]
fn test_export_refuses_relative_path() {
    let db_path = setup_test_db("export_relative");
    seed_site(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "export",
            "--entity",
            "projects",
            "--file",
            "projects.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_requires_force_to_overwrite() {
    let db_path = setup_test_db("export_force");
    seed_site(&db_path);

    let out = temp_out("force", "csv");
    fs::write(&out, "placeholder").unwrap();

    slg()
        .args([
            "--db", &db_path, "export", "--entity", "projects", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("use --force"));

    slg()
        .args([
            "--db", &db_path, "export", "--entity", "projects", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Riverside Tower"));
}

#[test]
fn test_export_empty_table_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("empty", "json");

    slg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--entity", "workers", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}
