//! CRUD for the `workers` table.

use crate::errors::{AppError, AppResult};
use crate::models::worker::{Worker, WorkerPatch};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        project_id: row.get("project_id")?,
    })
}

pub fn create_worker(
    conn: &Connection,
    name: &str,
    role: &str,
    project_id: Option<i64>,
) -> AppResult<Worker> {
    conn.execute(
        "INSERT INTO workers (name, role, project_id)
         VALUES (?1, ?2, ?3)",
        params![name, role, project_id],
    )?;

    let id = conn.last_insert_rowid();
    get_worker(conn, id)?
        .ok_or_else(|| AppError::Other(format!("worker {} missing after insert", id)))
}

pub fn get_worker(conn: &Connection, id: i64) -> AppResult<Option<Worker>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, role, project_id
         FROM workers WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn update_worker(conn: &Connection, id: i64, patch: &WorkerPatch) -> AppResult<Option<Worker>> {
    let Some(current) = get_worker(conn, id)? else {
        return Ok(None);
    };

    let name = patch.name.clone().unwrap_or(current.name);
    let role = patch.role.clone().unwrap_or(current.role);
    let project_id = patch.project_id.or(current.project_id);

    conn.execute(
        "UPDATE workers SET name = ?1, role = ?2, project_id = ?3
         WHERE id = ?4",
        params![name, role, project_id, id],
    )?;

    get_worker(conn, id)
}

pub fn delete_worker(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM workers WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

pub fn list_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, role, project_id
         FROM workers",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
