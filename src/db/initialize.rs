use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// `CREATE TABLE IF NOT EXISTS` keeps this idempotent, so it is safe to run
/// on every open. Foreign keys are declared but enforcement stays off
/// (no `PRAGMA foreign_keys`): deleting a parent row leaves orphans behind.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            location    TEXT NOT NULL,
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS daily_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            weather     TEXT NOT NULL,
            summary     TEXT NOT NULL,
            project_id  INTEGER NOT NULL REFERENCES projects(id)
        );

        CREATE TABLE IF NOT EXISTS workers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            role        TEXT NOT NULL,
            project_id  INTEGER REFERENCES projects(id)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            hours       REAL NOT NULL,
            status      TEXT NOT NULL,
            log_id      INTEGER NOT NULL REFERENCES daily_logs(id),
            worker_id   INTEGER NOT NULL REFERENCES workers(id)
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_daily_logs_project ON daily_logs(project_id);
        CREATE INDEX IF NOT EXISTS idx_workers_project ON workers(project_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_log ON tasks(log_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_worker ON tasks(worker_id);
        "#,
    )?;
    Ok(())
}
