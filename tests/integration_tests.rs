//! End-to-end tests driving the compiled binary.

use predicates::str::contains;

mod common;
use common::{seed_site, setup_test_db, slg};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_show_projects() {
    let db_path = setup_test_db("add_show_projects");
    seed_site(&db_path);

    slg()
        .args(["--db", &db_path, "show-projects"])
        .assert()
        .success()
        .stdout(contains("Riverside Tower"))
        .stdout(contains("Lagos"))
        .stdout(contains("2024-01-01"));
}

#[test]
fn test_get_project_not_found() {
    let db_path = setup_test_db("get_project_missing");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "get-project", "7"])
        .assert()
        .success()
        .stdout(contains("Project not found."));
}

#[test]
fn test_update_project_partial() {
    let db_path = setup_test_db("update_project_partial");
    seed_site(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "update-project",
            "1",
            "--location",
            "Abuja",
        ])
        .assert()
        .success()
        .stdout(contains("Project 1 updated."));

    // Only the location changed
    slg()
        .args(["--db", &db_path, "get-project", "1"])
        .assert()
        .success()
        .stdout(contains("Riverside Tower"))
        .stdout(contains("Abuja"));
}

#[test]
fn test_update_project_without_flags_is_a_noop() {
    let db_path = setup_test_db("update_project_noop");
    seed_site(&db_path);

    slg()
        .args(["--db", &db_path, "update-project", "1"])
        .assert()
        .success()
        .stdout(contains("No updates provided."));
}

#[test]
fn test_update_missing_project_reports_not_found() {
    let db_path = setup_test_db("update_project_missing");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "update-project", "9", "--name", "Ghost"])
        .assert()
        .success()
        .stdout(contains("Project not found."));
}

#[test]
fn test_delete_project_twice() {
    let db_path = setup_test_db("delete_project_twice");
    seed_site(&db_path);

    slg()
        .args(["--db", &db_path, "delete-project", "1"])
        .assert()
        .success()
        .stdout(contains("Project 1 deleted."));

    slg()
        .args(["--db", &db_path, "delete-project", "1"])
        .assert()
        .success()
        .stdout(contains("Project not found."));
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("invalid_date");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            &db_path,
            "add-project",
            "--name",
            "Depot",
            "--location",
            "Kano",
            "--start-date",
            "01/02/2024",
            "--end-date",
            "2024-03-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    // Nothing was written
    slg()
        .args(["--db", &db_path, "show-projects"])
        .assert()
        .success()
        .stdout(contains("No projects found."));
}

#[test]
fn test_full_site_scenario() {
    let db_path = setup_test_db("full_scenario");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            &db_path,
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
        .success()
        .stdout(contains("with ID 1"));

    slg()
        .args([
            "--db",
            &db_path,
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
        .success()
        .stdout(contains("Created daily log 1 for project 1"));

    slg()
        .args([
            "--db",
            &db_path,
            "add-worker",
            "--name",
            "A. Musa",
            "--role",
            "Electrician",
            "--project-id",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("Worker 'A. Musa' added with ID 1"));

    slg()
        .args([
            "--db",
            &db_path,
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
        .success()
        .stdout(contains("with ID 1"));

    slg()
        .args(["--db", &db_path, "show-tasks"])
        .assert()
        .success()
        .stdout(contains("Wire ground floor"))
        .stdout(contains("pending"))
        .stdout(contains("6"));

    // Deleting the project does not touch its daily log.
    slg()
        .args(["--db", &db_path, "delete-project", "1"])
        .assert()
        .success()
        .stdout(contains("Project 1 deleted."));

    slg()
        .args(["--db", &db_path, "get-daily-log", "1"])
        .assert()
        .success()
        .stdout(contains("Poured foundation"));
}

#[test]
fn test_add_task_uses_configured_default_status() {
    let db_path = setup_test_db("task_default_status");
    seed_site(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "add-task",
            "--description",
            "Sweep scaffolding",
            "--hours",
            "2",
            "--log-id",
            "1",
            "--worker-id",
            "1",
        ])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "get-task", "2"])
        .assert()
        .success()
        .stdout(contains("pending"));
}

#[test]
fn test_worker_without_project_shows_dash() {
    let db_path = setup_test_db("worker_unassigned");

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

    slg()
        .args(["--db", &db_path, "get-worker", "1"])
        .assert()
        .success()
        .stdout(contains("Project: -"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_maintenance");
    seed_site(&db_path);

    slg()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    slg()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Projects:"))
        .stdout(contains("Tasks:"))
        .stdout(contains("2024-01-02"));

    slg()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_internal_log_records_mutations() {
    let db_path = setup_test_db("internal_log");
    seed_site(&db_path);

    slg()
        .args(["--db", &db_path, "delete-task", "1"])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("project 1"))
        .stdout(contains("task 1"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup");
    seed_site(&db_path);

    let dest = common::temp_out("backup_copy", "sqlite");

    slg()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}

#[test]
fn test_menu_exit() {
    let db_path = setup_test_db("menu_exit");

    slg()
        .args(["--db", &db_path, "menu"])
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(contains("Goodbye"));
}

#[test]
fn test_menu_add_and_show_project() {
    let db_path = setup_test_db("menu_add_project");

    slg()
        .args(["--db", &db_path, "menu"])
        .write_stdin("1\n1\nDepot Yard\nKano\n2024-02-01\n2024-03-01\n2\n5\n5\n")
        .assert()
        .success()
        .stdout(contains("Depot Yard' added (ID 1)"));

    slg()
        .args(["--db", &db_path, "show-projects"])
        .assert()
        .success()
        .stdout(contains("Depot Yard"));
}
