//! CRUD for the `tasks` table.

use crate::errors::{AppError, AppResult};
use crate::models::task::{Task, TaskPatch};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        description: row.get("description")?,
        hours: row.get("hours")?,
        status: row.get("status")?,
        log_id: row.get("log_id")?,
        worker_id: row.get("worker_id")?,
    })
}

pub fn create_task(
    conn: &Connection,
    description: &str,
    hours: f64,
    status: &str,
    log_id: i64,
    worker_id: i64,
) -> AppResult<Task> {
    conn.execute(
        "INSERT INTO tasks (description, hours, status, log_id, worker_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![description, hours, status, log_id, worker_id],
    )?;

    let id = conn.last_insert_rowid();
    get_task(conn, id)?.ok_or_else(|| AppError::Other(format!("task {} missing after insert", id)))
}

pub fn get_task(conn: &Connection, id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, description, hours, status, log_id, worker_id
         FROM tasks WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn update_task(conn: &Connection, id: i64, patch: &TaskPatch) -> AppResult<Option<Task>> {
    let Some(current) = get_task(conn, id)? else {
        return Ok(None);
    };

    let description = patch.description.clone().unwrap_or(current.description);
    let hours = patch.hours.unwrap_or(current.hours);
    let status = patch.status.clone().unwrap_or(current.status);
    let log_id = patch.log_id.unwrap_or(current.log_id);
    let worker_id = patch.worker_id.unwrap_or(current.worker_id);

    conn.execute(
        "UPDATE tasks SET description = ?1, hours = ?2, status = ?3, log_id = ?4, worker_id = ?5
         WHERE id = ?6",
        params![description, hours, status, log_id, worker_id, id],
    )?;

    get_task(conn, id)
}

pub fn delete_task(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

pub fn list_tasks(conn: &Connection) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, description, hours, status, log_id, worker_id
         FROM tasks",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
