use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::workers;
use crate::errors::AppResult;
use crate::models::worker::WorkerPatch;
use crate::ui::messages::{success, warning};
use crate::ui::tables;

/// Worker CRUD commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddWorker {
            name,
            role,
            project_id,
        } => {
            let pool = DbPool::new(&cfg.database)?;
            let worker = workers::create_worker(&pool.conn, name, role, *project_id)?;

            success(format!(
                "Worker '{}' added with ID {}",
                worker.name, worker.id
            ));
            audit(
                &pool,
                "add",
                &format!("worker {}", worker.id),
                &format!("Created worker \"{}\"", worker.name),
            );
        }

        Commands::ShowWorkers => {
            let pool = DbPool::new(&cfg.database)?;
            let all = workers::list_workers(&pool.conn)?;

            if all.is_empty() {
                println!("No workers found.");
            } else {
                print!("{}", tables::worker_table(&all));
            }
        }

        Commands::GetWorker { id } => {
            let pool = DbPool::new(&cfg.database)?;
            match workers::get_worker(&pool.conn, *id)? {
                Some(w) => {
                    println!("ID:      {}", w.id);
                    println!("Name:    {}", w.name);
                    println!("Role:    {}", w.role);
                    match w.project_id {
                        Some(pid) => println!("Project: {}", pid),
                        None => println!("Project: -"),
                    }
                }
                None => warning("Worker not found."),
            }
        }

        Commands::UpdateWorker {
            id,
            name,
            role,
            project_id,
        } => {
            let patch = WorkerPatch {
                name: name.clone(),
                role: role.clone(),
                project_id: *project_id,
            };

            if patch.is_empty() {
                println!("No updates provided.");
                return Ok(());
            }

            let pool = DbPool::new(&cfg.database)?;
            match workers::update_worker(&pool.conn, *id, &patch)? {
                Some(_) => {
                    success(format!("Worker {} updated.", id));
                    audit(&pool, "update", &format!("worker {}", id), "Updated worker");
                }
                None => warning("Worker not found."),
            }
        }

        Commands::DeleteWorker { id } => {
            let pool = DbPool::new(&cfg.database)?;
            if workers::delete_worker(&pool.conn, *id)? {
                success(format!("Worker {} deleted.", id));
                audit(&pool, "delete", &format!("worker {}", id), "Deleted worker");
            } else {
                warning("Worker not found.");
            }
        }

        _ => {}
    }

    Ok(())
}
