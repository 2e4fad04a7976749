use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print a short report about the database file and its tables.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    for (label, table) in [
        ("Projects", "projects"),
        ("Daily logs", "daily_logs"),
        ("Workers", "workers"),
        ("Tasks", "tasks"),
    ] {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN, label, RESET, GREEN, count, RESET
        );
    }

    // Covered period, taken from the daily logs
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM daily_logs ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM daily_logs ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    if let (Some(f), Some(l)) = (first, last) {
        println!("{}• Logged period:{} {} .. {}", CYAN, RESET, f, l);
    }

    println!();
    Ok(())
}
