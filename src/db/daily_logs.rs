//! CRUD for the `daily_logs` table.

use crate::db::stored_date;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::{DailyLog, DailyLogPatch};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<DailyLog> {
    let date_str: String = row.get("date")?;

    Ok(DailyLog {
        id: row.get("id")?,
        date: stored_date(&date_str)?,
        weather: row.get("weather")?,
        summary: row.get("summary")?,
        project_id: row.get("project_id")?,
    })
}

pub fn create_daily_log(
    conn: &Connection,
    date: NaiveDate,
    weather: &str,
    summary: &str,
    project_id: i64,
) -> AppResult<DailyLog> {
    conn.execute(
        "INSERT INTO daily_logs (date, weather, summary, project_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            date.format("%Y-%m-%d").to_string(),
            weather,
            summary,
            project_id,
        ],
    )?;

    let id = conn.last_insert_rowid();
    get_daily_log(conn, id)?
        .ok_or_else(|| AppError::Other(format!("daily log {} missing after insert", id)))
}

pub fn get_daily_log(conn: &Connection, id: i64) -> AppResult<Option<DailyLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, weather, summary, project_id
         FROM daily_logs WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn update_daily_log(
    conn: &Connection,
    id: i64,
    patch: &DailyLogPatch,
) -> AppResult<Option<DailyLog>> {
    let Some(current) = get_daily_log(conn, id)? else {
        return Ok(None);
    };

    let date = patch.date.unwrap_or(current.date);
    let weather = patch.weather.clone().unwrap_or(current.weather);
    let summary = patch.summary.clone().unwrap_or(current.summary);
    let project_id = patch.project_id.unwrap_or(current.project_id);

    conn.execute(
        "UPDATE daily_logs SET date = ?1, weather = ?2, summary = ?3, project_id = ?4
         WHERE id = ?5",
        params![
            date.format("%Y-%m-%d").to_string(),
            weather,
            summary,
            project_id,
            id,
        ],
    )?;

    get_daily_log(conn, id)
}

pub fn delete_daily_log(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM daily_logs WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

pub fn list_daily_logs(conn: &Connection) -> AppResult<Vec<DailyLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, weather, summary, project_id
         FROM daily_logs",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
