pub mod daily_logs;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod projects;
pub mod stats;
pub mod tasks;
pub mod workers;

use crate::errors::AppError;
use chrono::NaiveDate;

/// Parse a stored "YYYY-MM-DD" column value back into a date.
pub(crate) fn stored_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}
