use chrono::NaiveDate;
use serde::Serialize;

/// A construction job with a name, a location and a date range.
/// `start_date <= end_date` is expected but not enforced anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate, // ⇔ projects.start_date (TEXT "YYYY-MM-DD")
    pub end_date: NaiveDate,   // ⇔ projects.end_date (TEXT "YYYY-MM-DD")
}

/// Fields of a project that may legally be changed after creation.
/// `None` leaves the stored value untouched.
#[derive(Debug, Default, Clone)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}
