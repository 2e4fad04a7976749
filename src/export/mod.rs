mod fs_utils;
mod json_csv;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for export commands.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{} export completed: {}", label, path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportEntity {
    Projects,
    DailyLogs,
    Workers,
    Tasks,
}

impl ExportEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportEntity::Projects => "projects",
            ExportEntity::DailyLogs => "daily-logs",
            ExportEntity::Workers => "workers",
            ExportEntity::Tasks => "tasks",
        }
    }
}
