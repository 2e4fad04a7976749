//! Per-entity table builders used by the `show-*` commands and the menu.

use crate::models::daily_log::DailyLog;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::models::worker::Worker;
use crate::utils::date::fmt_date;
use crate::utils::table::Table;

fn opt_id(v: Option<i64>) -> String {
    v.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn project_table(projects: &[Project]) -> String {
    let mut t = Table::new(vec!["ID", "Name", "Location", "Start", "End"]);
    for p in projects {
        t.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.location.clone(),
            fmt_date(&p.start_date),
            fmt_date(&p.end_date),
        ]);
    }
    t.render()
}

pub fn daily_log_table(logs: &[DailyLog]) -> String {
    let mut t = Table::new(vec!["ID", "Date", "Weather", "Summary", "Project"]);
    for l in logs {
        t.add_row(vec![
            l.id.to_string(),
            fmt_date(&l.date),
            l.weather.clone(),
            l.summary.clone(),
            l.project_id.to_string(),
        ]);
    }
    t.render()
}

pub fn worker_table(workers: &[Worker]) -> String {
    let mut t = Table::new(vec!["ID", "Name", "Role", "Project"]);
    for w in workers {
        t.add_row(vec![
            w.id.to_string(),
            w.name.clone(),
            w.role.clone(),
            opt_id(w.project_id),
        ]);
    }
    t.render()
}

pub fn task_table(tasks: &[Task]) -> String {
    let mut t = Table::new(vec!["ID", "Description", "Hours", "Status", "Log", "Worker"]);
    for task in tasks {
        t.add_row(vec![
            task.id.to_string(),
            task.description.clone(),
            task.hours.to_string(),
            task.status.clone(),
            task.log_id.to_string(),
            task.worker_id.to_string(),
        ]);
    }
    t.render()
}
