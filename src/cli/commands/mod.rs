pub mod backup;
pub mod config;
pub mod daily_log;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod menu;
pub mod project;
pub mod task;
pub mod worker;

use crate::db::log::sllog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Record a mutation in the internal log table. Failing to log is never
/// fatal for the operation itself.
pub(crate) fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = sllog(&pool.conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}

/// Parse an optional `--...-date` flag, rejecting malformed input before it
/// reaches the data layer.
pub(crate) fn parse_opt_date(v: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match v {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(None),
    }
}
