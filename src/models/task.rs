use serde::Serialize;

/// A unit of work with hours and a free-text status label, tied to a daily
/// log and a worker.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub hours: f64,     // ⇔ tasks.hours (REAL)
    pub status: String, // free text, e.g. "pending", "done"
    pub log_id: i64,
    pub worker_id: i64,
}

#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub hours: Option<f64>,
    pub status: Option<String>,
    pub log_id: Option<i64>,
    pub worker_id: Option<i64>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.hours.is_none()
            && self.status.is_none()
            && self.log_id.is_none()
            && self.worker_id.is_none()
    }
}
