use crate::db::pool::DbPool;
use crate::db::{daily_logs, log::sllog, projects, tasks, workers};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportEntity, ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one entity table to `file`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite an existing file
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        entity: ExportEntity,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                file
            )));
        }

        ensure_writable(path, force)?;

        let written = match entity {
            ExportEntity::Projects => {
                write_records(&projects::list_projects(&pool.conn)?, &format, path)?
            }
            ExportEntity::DailyLogs => {
                write_records(&daily_logs::list_daily_logs(&pool.conn)?, &format, path)?
            }
            ExportEntity::Workers => {
                write_records(&workers::list_workers(&pool.conn)?, &format, path)?
            }
            ExportEntity::Tasks => write_records(&tasks::list_tasks(&pool.conn)?, &format, path)?,
        };

        if !written {
            warning("No records found for selected entity.");
            return Ok(());
        }

        notify_export_success(format.as_str(), path);

        let _ = sllog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} as {}", entity.as_str(), format.as_str()),
        );

        Ok(())
    }
}

/// Returns false (and writes nothing) when the table is empty.
fn write_records<T: Serialize>(
    records: &[T],
    format: &ExportFormat,
    path: &Path,
) -> AppResult<bool> {
    if records.is_empty() {
        return Ok(false);
    }

    match format {
        ExportFormat::Csv => export_csv(records, path)?,
        ExportFormat::Json => export_json(records, path)?,
    }

    Ok(true)
}
