use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::tasks;
use crate::errors::AppResult;
use crate::models::task::TaskPatch;
use crate::ui::messages::{success, warning};
use crate::ui::tables;

/// Task CRUD commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddTask {
            description,
            hours,
            status,
            log_id,
            worker_id,
        } => {
            let status = status
                .clone()
                .unwrap_or_else(|| cfg.default_task_status.clone());

            let pool = DbPool::new(&cfg.database)?;
            let task =
                tasks::create_task(&pool.conn, description, *hours, &status, *log_id, *worker_id)?;

            success(format!(
                "Created task \"{}\" with ID {}",
                task.description, task.id
            ));
            audit(
                &pool,
                "add",
                &format!("task {}", task.id),
                &format!("Created task \"{}\"", task.description),
            );
        }

        Commands::ShowTasks => {
            let pool = DbPool::new(&cfg.database)?;
            let all = tasks::list_tasks(&pool.conn)?;

            if all.is_empty() {
                println!("No tasks found.");
            } else {
                print!("{}", tables::task_table(&all));
            }
        }

        Commands::GetTask { id } => {
            let pool = DbPool::new(&cfg.database)?;
            match tasks::get_task(&pool.conn, *id)? {
                Some(t) => {
                    println!("ID:          {}", t.id);
                    println!("Description: {}", t.description);
                    println!("Hours:       {}", t.hours);
                    println!("Status:      {}", t.status);
                    println!("Log:         {} | Worker: {}", t.log_id, t.worker_id);
                }
                None => warning("Task not found."),
            }
        }

        Commands::UpdateTask {
            id,
            description,
            hours,
            status,
            log_id,
            worker_id,
        } => {
            let patch = TaskPatch {
                description: description.clone(),
                hours: *hours,
                status: status.clone(),
                log_id: *log_id,
                worker_id: *worker_id,
            };

            if patch.is_empty() {
                println!("No updates provided.");
                return Ok(());
            }

            let pool = DbPool::new(&cfg.database)?;
            match tasks::update_task(&pool.conn, *id, &patch)? {
                Some(_) => {
                    success(format!("Task {} updated.", id));
                    audit(&pool, "update", &format!("task {}", id), "Updated task");
                }
                None => warning("Task not found."),
            }
        }

        Commands::DeleteTask { id } => {
            let pool = DbPool::new(&cfg.database)?;
            if tasks::delete_task(&pool.conn, *id)? {
                success(format!("Task {} deleted.", id));
                audit(&pool, "delete", &format!("task {}", id), "Deleted task");
            } else {
                warning("Task not found.");
            }
        }

        _ => {}
    }

    Ok(())
}
