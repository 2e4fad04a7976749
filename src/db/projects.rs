//! CRUD for the `projects` table. Each call is one independent unit of work
//! on the caller's connection.

use crate::db::stored_date;
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, ProjectPatch};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Project> {
    let start_str: String = row.get("start_date")?;
    let end_str: String = row.get("end_date")?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        location: row.get("location")?,
        start_date: stored_date(&start_str)?,
        end_date: stored_date(&end_str)?,
    })
}

pub fn create_project(
    conn: &Connection,
    name: &str,
    location: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<Project> {
    conn.execute(
        "INSERT INTO projects (name, location, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            name,
            location,
            start_date.format("%Y-%m-%d").to_string(),
            end_date.format("%Y-%m-%d").to_string(),
        ],
    )?;

    let id = conn.last_insert_rowid();
    get_project(conn, id)?
        .ok_or_else(|| AppError::Other(format!("project {} missing after insert", id)))
}

pub fn get_project(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, location, start_date, end_date
         FROM projects WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Apply a partial update. Returns the updated record, or `None` when the id
/// does not exist (nothing is written in that case).
pub fn update_project(
    conn: &Connection,
    id: i64,
    patch: &ProjectPatch,
) -> AppResult<Option<Project>> {
    let Some(current) = get_project(conn, id)? else {
        return Ok(None);
    };

    let name = patch.name.clone().unwrap_or(current.name);
    let location = patch.location.clone().unwrap_or(current.location);
    let start_date = patch.start_date.unwrap_or(current.start_date);
    let end_date = patch.end_date.unwrap_or(current.end_date);

    conn.execute(
        "UPDATE projects SET name = ?1, location = ?2, start_date = ?3, end_date = ?4
         WHERE id = ?5",
        params![
            name,
            location,
            start_date.format("%Y-%m-%d").to_string(),
            end_date.format("%Y-%m-%d").to_string(),
            id,
        ],
    )?;

    get_project(conn, id)
}

/// Hard delete. Returns `false` when the id does not exist.
/// Daily logs, workers and tasks referencing the project are left in place.
pub fn delete_project(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM projects WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, location, start_date, end_date
         FROM projects",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
