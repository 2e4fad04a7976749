use crate::errors::{AppError, AppResult};
use csv::Writer;
use serde::Serialize;
use std::path::Path;

/// Write the records as CSV, header row included.
pub fn export_csv<T: Serialize>(records: &[T], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for r in records {
        wtr.serialize(r).map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the records as pretty-printed JSON.
pub fn export_json<T: Serialize>(records: &[T], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
