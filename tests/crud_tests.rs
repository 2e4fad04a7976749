//! Data-access layer tests against an in-memory database.

use chrono::NaiveDate;
use rusqlite::Connection;
use sitelogger::db::{daily_logs, initialize, projects, tasks, workers};
use sitelogger::models::daily_log::DailyLogPatch;
use sitelogger::models::project::ProjectPatch;
use sitelogger::models::task::TaskPatch;
use sitelogger::models::worker::WorkerPatch;

fn mem_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    initialize::init_db(&conn).expect("init schema");
    conn
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn create_then_get_returns_equal_record() {
    let conn = mem_conn();

    let created = projects::create_project(
        &conn,
        "Riverside Tower",
        "Lagos",
        d("2024-01-01"),
        d("2024-06-30"),
    )
    .unwrap();

    let fetched = projects::get_project(&conn, created.id).unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Riverside Tower");
    assert_eq!(fetched.location, "Lagos");
    assert_eq!(fetched.start_date, d("2024-01-01"));
    assert_eq!(fetched.end_date, d("2024-06-30"));
}

#[test]
fn get_missing_id_is_none() {
    let conn = mem_conn();
    assert!(projects::get_project(&conn, 42).unwrap().is_none());
}

#[test]
fn update_missing_id_returns_none_and_keeps_rows() {
    let conn = mem_conn();

    projects::create_project(&conn, "Depot", "Kano", d("2024-02-01"), d("2024-03-01")).unwrap();

    let patch = ProjectPatch {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(projects::update_project(&conn, 99, &patch).unwrap().is_none());

    let all = projects::list_projects(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Depot");
}

#[test]
fn partial_patch_changes_only_named_fields() {
    let conn = mem_conn();

    let p = projects::create_project(&conn, "Depot", "Kano", d("2024-02-01"), d("2024-03-01"))
        .unwrap();

    let patch = ProjectPatch {
        location: Some("Abuja".to_string()),
        ..Default::default()
    };
    let updated = projects::update_project(&conn, p.id, &patch)
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Depot");
    assert_eq!(updated.location, "Abuja");
    assert_eq!(updated.start_date, d("2024-02-01"));
    assert_eq!(updated.end_date, d("2024-03-01"));
}

#[test]
fn empty_patch_is_a_noop_returning_current_record() {
    let conn = mem_conn();

    let p = projects::create_project(&conn, "Depot", "Kano", d("2024-02-01"), d("2024-03-01"))
        .unwrap();

    let updated = projects::update_project(&conn, p.id, &ProjectPatch::default())
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Depot");
    assert_eq!(updated.location, "Kano");
}

#[test]
fn delete_twice_reports_first_success_then_missing() {
    let conn = mem_conn();

    let p = projects::create_project(&conn, "Depot", "Kano", d("2024-02-01"), d("2024-03-01"))
        .unwrap();

    assert!(projects::delete_project(&conn, p.id).unwrap());
    assert!(!projects::delete_project(&conn, p.id).unwrap());
}

#[test]
fn list_counts_creates_minus_deletes() {
    let conn = mem_conn();

    for i in 0..5 {
        projects::create_project(
            &conn,
            &format!("Site {}", i),
            "Lagos",
            d("2024-01-01"),
            d("2024-12-31"),
        )
        .unwrap();
    }

    assert!(projects::delete_project(&conn, 2).unwrap());
    assert!(projects::delete_project(&conn, 4).unwrap());

    assert_eq!(projects::list_projects(&conn).unwrap().len(), 3);
}

#[test]
fn worker_can_be_created_without_project() {
    let conn = mem_conn();

    let w = workers::create_worker(&conn, "B. Okoro", "Mason", None).unwrap();
    assert!(w.project_id.is_none());

    // Reassignment via patch
    let patch = WorkerPatch {
        project_id: Some(7),
        ..Default::default()
    };
    let updated = workers::update_worker(&conn, w.id, &patch).unwrap().unwrap();
    assert_eq!(updated.project_id, Some(7));
    assert_eq!(updated.name, "B. Okoro");
}

#[test]
fn daily_log_patch_moves_log_between_projects() {
    let conn = mem_conn();

    let log = daily_logs::create_daily_log(&conn, d("2024-01-02"), "Sunny", "Cleared site", 1)
        .unwrap();

    let patch = DailyLogPatch {
        project_id: Some(2),
        ..Default::default()
    };
    let updated = daily_logs::update_daily_log(&conn, log.id, &patch)
        .unwrap()
        .unwrap();

    assert_eq!(updated.project_id, 2);
    assert_eq!(updated.weather, "Sunny");
    assert_eq!(updated.date, d("2024-01-02"));
}

#[test]
fn task_roundtrip_and_status_patch() {
    let conn = mem_conn();

    let t = tasks::create_task(&conn, "Wire ground floor", 6.0, "pending", 1, 1).unwrap();
    assert_eq!(t.hours, 6.0);

    let patch = TaskPatch {
        status: Some("done".to_string()),
        hours: Some(7.5),
        ..Default::default()
    };
    let updated = tasks::update_task(&conn, t.id, &patch).unwrap().unwrap();

    assert_eq!(updated.status, "done");
    assert_eq!(updated.hours, 7.5);
    assert_eq!(updated.description, "Wire ground floor");
    assert_eq!(updated.log_id, 1);
}

#[test]
fn deleting_a_project_leaves_its_daily_logs_in_place() {
    let conn = mem_conn();

    let p = projects::create_project(
        &conn,
        "Riverside Tower",
        "Lagos",
        d("2024-01-01"),
        d("2024-06-30"),
    )
    .unwrap();
    let log =
        daily_logs::create_daily_log(&conn, d("2024-01-02"), "Sunny", "Poured foundation", p.id)
            .unwrap();

    assert!(projects::delete_project(&conn, p.id).unwrap());

    // The log now dangles: parent deletes neither cascade nor block.
    let orphan = daily_logs::get_daily_log(&conn, log.id).unwrap().unwrap();
    assert_eq!(orphan.project_id, p.id);
    assert!(projects::get_project(&conn, p.id).unwrap().is_none());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = mem_conn();

    let w1 = workers::create_worker(&conn, "A", "Mason", None).unwrap();
    assert!(workers::delete_worker(&conn, w1.id).unwrap());

    let w2 = workers::create_worker(&conn, "B", "Mason", None).unwrap();
    assert!(w2.id > w1.id);
}
