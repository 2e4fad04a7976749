use serde::Serialize;

/// A person performing site work, optionally assigned to a project.
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub project_id: Option<i64>, // NULL when the worker is unassigned
}

/// Updatable worker fields. A `project_id` patch can reassign a worker but
/// not clear the assignment; clearing is not part of the command surface.
#[derive(Debug, Default, Clone)]
pub struct WorkerPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub project_id: Option<i64>,
}

impl WorkerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.project_id.is_none()
    }
}
