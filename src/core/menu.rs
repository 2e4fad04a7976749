//! Interactive menu front-end. Same data-access calls as the subcommands,
//! driven by numbered prompts instead of flags.

use crate::config::Config;
use crate::db::log::sllog;
use crate::db::pool::DbPool;
use crate::db::{daily_logs, projects, tasks, workers};
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLogPatch;
use crate::models::project::ProjectPatch;
use crate::models::task::TaskPatch;
use crate::models::worker::WorkerPatch;
use crate::ui::messages::{ask_confirmation, error, header, success, warning};
use crate::ui::tables;
use crate::utils::date;
use std::io::{self, Write};

pub struct MenuLogic;

impl MenuLogic {
    pub fn run(cfg: &Config) -> AppResult<()> {
        loop {
            header("SiteLogger Main Menu");
            println!("1. Manage Projects");
            println!("2. Manage Daily Logs");
            println!("3. Manage Workers");
            println!("4. Manage Tasks");
            println!("5. Exit");

            match prompt("Choose an option")?.as_str() {
                "1" => project_menu(cfg)?,
                "2" => daily_log_menu(cfg)?,
                "3" => worker_menu(cfg)?,
                "4" => task_menu(cfg)?,
                "5" => {
                    println!("Goodbye!");
                    break;
                }
                _ => warning("Invalid choice."),
            }
        }
        Ok(())
    }
}

/// Read one trimmed line from stdin. A closed input stream ends the menu.
fn prompt(label: &str) -> AppResult<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut s = String::new();
    let n = io::stdin().read_line(&mut s)?;
    if n == 0 {
        return Err(AppError::Other("input stream closed".to_string()));
    }
    Ok(s.trim().to_string())
}

/// Optional prompt: empty input means "leave unchanged".
fn prompt_opt(label: &str) -> AppResult<Option<String>> {
    let s = prompt(label)?;
    if s.is_empty() { Ok(None) } else { Ok(Some(s)) }
}

fn prompt_id(label: &str) -> AppResult<Option<i64>> {
    let s = prompt(label)?;
    match s.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            error(format!("Invalid number: {}", s));
            Ok(None)
        }
    }
}

fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = sllog(&pool.conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}

// ---------- Projects ----------

fn project_menu(cfg: &Config) -> AppResult<()> {
    loop {
        header("Manage Projects");
        println!("1. Add Project");
        println!("2. Show Projects");
        println!("3. Update Project");
        println!("4. Delete Project");
        println!("5. Back");

        match prompt("Choose")?.as_str() {
            "1" => {
                let name = prompt("Project name")?;
                let location = prompt("Location")?;
                let Some(start) = read_date("Start date (YYYY-MM-DD)")? else {
                    continue;
                };
                let Some(end) = read_date("End date (YYYY-MM-DD)")? else {
                    continue;
                };

                let pool = DbPool::new(&cfg.database)?;
                match projects::create_project(&pool.conn, &name, &location, start, end) {
                    Ok(p) => {
                        success(format!("Project '{}' added (ID {})", p.name, p.id));
                        audit(
                            &pool,
                            "add",
                            &format!("project {}", p.id),
                            &format!("Created project \"{}\"", p.name),
                        );
                    }
                    Err(e) => error(format!("Error: {}", e)),
                }
            }
            "2" => {
                let pool = DbPool::new(&cfg.database)?;
                let all = projects::list_projects(&pool.conn)?;
                if all.is_empty() {
                    warning("No projects found.");
                } else {
                    print!("{}", tables::project_table(&all));
                }
            }
            "3" => {
                let Some(id) = prompt_id("Project ID to update")? else {
                    continue;
                };
                let patch = ProjectPatch {
                    name: prompt_opt("New name (empty = keep)")?,
                    location: prompt_opt("New location (empty = keep)")?,
                    start_date: read_opt_date("New start date (empty = keep)")?,
                    end_date: read_opt_date("New end date (empty = keep)")?,
                };
                if patch.is_empty() {
                    warning("No updates provided.");
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                match projects::update_project(&pool.conn, id, &patch)? {
                    Some(_) => {
                        success(format!("Project {} updated.", id));
                        audit(
                            &pool,
                            "update",
                            &format!("project {}", id),
                            "Updated project",
                        );
                    }
                    None => warning("Project not found."),
                }
            }
            "4" => {
                let Some(id) = prompt_id("Project ID to delete")? else {
                    continue;
                };
                if !ask_confirmation(&format!("Delete project {}? This is irreversible.", id)) {
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                if projects::delete_project(&pool.conn, id)? {
                    success(format!("Project {} deleted.", id));
                    audit(
                        &pool,
                        "delete",
                        &format!("project {}", id),
                        "Deleted project",
                    );
                } else {
                    warning("Project not found.");
                }
            }
            "5" => break,
            _ => warning("Invalid choice."),
        }
    }
    Ok(())
}

// ---------- Daily Logs ----------

fn daily_log_menu(cfg: &Config) -> AppResult<()> {
    loop {
        header("Manage Daily Logs");
        println!("1. Add Daily Log");
        println!("2. Show Daily Logs");
        println!("3. Update Daily Log");
        println!("4. Delete Daily Log");
        println!("5. Back");

        match prompt("Choose")?.as_str() {
            "1" => {
                let Some(project_id) = prompt_id("Project ID")? else {
                    continue;
                };
                // Empty date means today.
                let log_date = match prompt_opt("Date (YYYY-MM-DD, empty = today)")? {
                    None => date::today(),
                    Some(s) => match date::parse_date(&s) {
                        Some(d) => d,
                        None => {
                            error("Invalid date format. Use YYYY-MM-DD.");
                            continue;
                        }
                    },
                };
                let weather = prompt("Weather conditions")?;
                let summary = prompt("Summary of the day")?;

                let pool = DbPool::new(&cfg.database)?;
                match daily_logs::create_daily_log(
                    &pool.conn, log_date, &weather, &summary, project_id,
                ) {
                    Ok(l) => {
                        success(format!("Daily log added (ID {})", l.id));
                        audit(
                            &pool,
                            "add",
                            &format!("daily log {}", l.id),
                            &format!("Created daily log for project {}", l.project_id),
                        );
                    }
                    Err(e) => error(format!("Error: {}", e)),
                }
            }
            "2" => {
                let pool = DbPool::new(&cfg.database)?;
                let all = daily_logs::list_daily_logs(&pool.conn)?;
                if all.is_empty() {
                    warning("No daily logs found.");
                } else {
                    print!("{}", tables::daily_log_table(&all));
                }
            }
            "3" => {
                let Some(id) = prompt_id("Daily log ID to update")? else {
                    continue;
                };
                let patch = DailyLogPatch {
                    date: read_opt_date("New date (empty = keep)")?,
                    weather: prompt_opt("New weather (empty = keep)")?,
                    summary: prompt_opt("New summary (empty = keep)")?,
                    project_id: read_opt_id("New project ID (empty = keep)")?,
                };
                if patch.is_empty() {
                    warning("No updates provided.");
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                match daily_logs::update_daily_log(&pool.conn, id, &patch)? {
                    Some(_) => {
                        success(format!("Daily log {} updated.", id));
                        audit(
                            &pool,
                            "update",
                            &format!("daily log {}", id),
                            "Updated daily log",
                        );
                    }
                    None => warning("Daily log not found."),
                }
            }
            "4" => {
                let Some(id) = prompt_id("Daily log ID to delete")? else {
                    continue;
                };
                if !ask_confirmation(&format!("Delete daily log {}? This is irreversible.", id)) {
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                if daily_logs::delete_daily_log(&pool.conn, id)? {
                    success(format!("Daily log {} deleted.", id));
                    audit(
                        &pool,
                        "delete",
                        &format!("daily log {}", id),
                        "Deleted daily log",
                    );
                } else {
                    warning("Daily log not found.");
                }
            }
            "5" => break,
            _ => warning("Invalid choice."),
        }
    }
    Ok(())
}

// ---------- Workers ----------

fn worker_menu(cfg: &Config) -> AppResult<()> {
    loop {
        header("Manage Workers");
        println!("1. Add Worker");
        println!("2. Show Workers");
        println!("3. Update Worker");
        println!("4. Delete Worker");
        println!("5. Back");

        match prompt("Choose")?.as_str() {
            "1" => {
                let name = prompt("Worker name")?;
                let role = prompt("Role")?;
                let project_id = read_opt_id("Project ID (empty = unassigned)")?;

                let pool = DbPool::new(&cfg.database)?;
                match workers::create_worker(&pool.conn, &name, &role, project_id) {
                    Ok(w) => {
                        success(format!("Worker '{}' added (ID {})", w.name, w.id));
                        audit(
                            &pool,
                            "add",
                            &format!("worker {}", w.id),
                            &format!("Created worker \"{}\"", w.name),
                        );
                    }
                    Err(e) => error(format!("Error: {}", e)),
                }
            }
            "2" => {
                let pool = DbPool::new(&cfg.database)?;
                let all = workers::list_workers(&pool.conn)?;
                if all.is_empty() {
                    warning("No workers found.");
                } else {
                    print!("{}", tables::worker_table(&all));
                }
            }
            "3" => {
                let Some(id) = prompt_id("Worker ID to update")? else {
                    continue;
                };
                let patch = WorkerPatch {
                    name: prompt_opt("New name (empty = keep)")?,
                    role: prompt_opt("New role (empty = keep)")?,
                    project_id: read_opt_id("New project ID (empty = keep)")?,
                };
                if patch.is_empty() {
                    warning("No updates provided.");
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                match workers::update_worker(&pool.conn, id, &patch)? {
                    Some(_) => {
                        success(format!("Worker {} updated.", id));
                        audit(&pool, "update", &format!("worker {}", id), "Updated worker");
                    }
                    None => warning("Worker not found."),
                }
            }
            "4" => {
                let Some(id) = prompt_id("Worker ID to delete")? else {
                    continue;
                };
                if !ask_confirmation(&format!("Delete worker {}? This is irreversible.", id)) {
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                if workers::delete_worker(&pool.conn, id)? {
                    success(format!("Worker {} deleted.", id));
                    audit(&pool, "delete", &format!("worker {}", id), "Deleted worker");
                } else {
                    warning("Worker not found.");
                }
            }
            "5" => break,
            _ => warning("Invalid choice."),
        }
    }
    Ok(())
}

// ---------- Tasks ----------

fn task_menu(cfg: &Config) -> AppResult<()> {
    loop {
        header("Manage Tasks");
        println!("1. Add Task");
        println!("2. Show Tasks");
        println!("3. Update Task");
        println!("4. Delete Task");
        println!("5. Back");

        match prompt("Choose")?.as_str() {
            "1" => {
                let description = prompt("Task description")?;
                let hours_s = prompt("Hours")?;
                let hours: f64 = match hours_s.parse() {
                    Ok(h) => h,
                    Err(_) => {
                        error(format!("Invalid number: {}", hours_s));
                        continue;
                    }
                };
                let status = match prompt_opt(&format!(
                    "Status (empty = {})",
                    cfg.default_task_status
                ))? {
                    Some(s) => s,
                    None => cfg.default_task_status.clone(),
                };
                let Some(log_id) = prompt_id("Daily log ID")? else {
                    continue;
                };
                let Some(worker_id) = prompt_id("Worker ID")? else {
                    continue;
                };

                let pool = DbPool::new(&cfg.database)?;
                match tasks::create_task(&pool.conn, &description, hours, &status, log_id, worker_id)
                {
                    Ok(t) => {
                        success(format!("Task added (ID {})", t.id));
                        audit(
                            &pool,
                            "add",
                            &format!("task {}", t.id),
                            &format!("Created task \"{}\"", t.description),
                        );
                    }
                    Err(e) => error(format!("Error: {}", e)),
                }
            }
            "2" => {
                let pool = DbPool::new(&cfg.database)?;
                let all = tasks::list_tasks(&pool.conn)?;
                if all.is_empty() {
                    warning("No tasks found.");
                } else {
                    print!("{}", tables::task_table(&all));
                }
            }
            "3" => {
                let Some(id) = prompt_id("Task ID to update")? else {
                    continue;
                };
                let hours = match prompt_opt("New hours (empty = keep)")? {
                    None => None,
                    Some(s) => match s.parse::<f64>() {
                        Ok(h) => Some(h),
                        Err(_) => {
                            error(format!("Invalid number: {}", s));
                            continue;
                        }
                    },
                };
                let patch = TaskPatch {
                    description: prompt_opt("New description (empty = keep)")?,
                    hours,
                    status: prompt_opt("New status (empty = keep)")?,
                    log_id: read_opt_id("New daily log ID (empty = keep)")?,
                    worker_id: read_opt_id("New worker ID (empty = keep)")?,
                };
                if patch.is_empty() {
                    warning("No updates provided.");
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                match tasks::update_task(&pool.conn, id, &patch)? {
                    Some(_) => {
                        success(format!("Task {} updated.", id));
                        audit(&pool, "update", &format!("task {}", id), "Updated task");
                    }
                    None => warning("Task not found."),
                }
            }
            "4" => {
                let Some(id) = prompt_id("Task ID to delete")? else {
                    continue;
                };
                if !ask_confirmation(&format!("Delete task {}? This is irreversible.", id)) {
                    continue;
                }

                let pool = DbPool::new(&cfg.database)?;
                if tasks::delete_task(&pool.conn, id)? {
                    success(format!("Task {} deleted.", id));
                    audit(&pool, "delete", &format!("task {}", id), "Deleted task");
                } else {
                    warning("Task not found.");
                }
            }
            "5" => break,
            _ => warning("Invalid choice."),
        }
    }
    Ok(())
}

// ---------- small input helpers ----------

/// Required date; `None` means the input was invalid and the caller should
/// re-show its menu.
fn read_date(label: &str) -> AppResult<Option<chrono::NaiveDate>> {
    let s = prompt(label)?;
    match date::parse_date(&s) {
        Some(d) => Ok(Some(d)),
        None => {
            error("Invalid date format. Use YYYY-MM-DD.");
            Ok(None)
        }
    }
}

fn read_opt_date(label: &str) -> AppResult<Option<chrono::NaiveDate>> {
    match prompt_opt(label)? {
        None => Ok(None),
        Some(s) => match date::parse_date(&s) {
            Some(d) => Ok(Some(d)),
            None => {
                error("Invalid date format. Use YYYY-MM-DD.");
                Ok(None)
            }
        },
    }
}

fn read_opt_id(label: &str) -> AppResult<Option<i64>> {
    match prompt_opt(label)? {
        None => Ok(None),
        Some(s) => match s.parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                error(format!("Invalid number: {}", s));
                Ok(None)
            }
        },
    }
}
