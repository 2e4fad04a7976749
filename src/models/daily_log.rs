use chrono::NaiveDate;
use serde::Serialize;

/// A dated record of site conditions and activity, always tied to a project.
#[derive(Debug, Clone, Serialize)]
pub struct DailyLog {
    pub id: i64,
    pub date: NaiveDate, // ⇔ daily_logs.date (TEXT "YYYY-MM-DD")
    pub weather: String,
    pub summary: String,
    pub project_id: i64, // ⇔ daily_logs.project_id (references projects.id, unenforced)
}

#[derive(Debug, Default, Clone)]
pub struct DailyLogPatch {
    pub date: Option<NaiveDate>,
    pub weather: Option<String>,
    pub summary: Option<String>,
    pub project_id: Option<i64>,
}

impl DailyLogPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.weather.is_none()
            && self.summary.is_none()
            && self.project_id.is_none()
    }
}
