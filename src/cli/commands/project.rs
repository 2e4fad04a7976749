use crate::cli::commands::{audit, parse_opt_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::projects;
use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectPatch;
use crate::ui::messages::{success, warning};
use crate::ui::tables;
use crate::utils::date;

/// Project CRUD commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddProject {
            name,
            location,
            start_date,
            end_date,
        } => {
            let start = date::parse_date(start_date)
                .ok_or_else(|| AppError::InvalidDate(start_date.clone()))?;
            let end =
                date::parse_date(end_date).ok_or_else(|| AppError::InvalidDate(end_date.clone()))?;

            let pool = DbPool::new(&cfg.database)?;
            let project = projects::create_project(&pool.conn, name, location, start, end)?;

            success(format!(
                "Created project \"{}\" with ID {}",
                project.name, project.id
            ));
            audit(
                &pool,
                "add",
                &format!("project {}", project.id),
                &format!("Created project \"{}\"", project.name),
            );
        }

        Commands::ShowProjects => {
            let pool = DbPool::new(&cfg.database)?;
            let all = projects::list_projects(&pool.conn)?;

            if all.is_empty() {
                println!("No projects found.");
            } else {
                print!("{}", tables::project_table(&all));
            }
        }

        Commands::GetProject { id } => {
            let pool = DbPool::new(&cfg.database)?;
            match projects::get_project(&pool.conn, *id)? {
                Some(p) => {
                    println!("ID:       {}", p.id);
                    println!("Name:     {}", p.name);
                    println!("Location: {}", p.location);
                    println!(
                        "Start:    {} | End: {}",
                        date::fmt_date(&p.start_date),
                        date::fmt_date(&p.end_date)
                    );
                }
                None => warning("Project not found."),
            }
        }

        Commands::UpdateProject {
            id,
            name,
            location,
            start_date,
            end_date,
        } => {
            let patch = ProjectPatch {
                name: name.clone(),
                location: location.clone(),
                start_date: parse_opt_date(start_date)?,
                end_date: parse_opt_date(end_date)?,
            };

            if patch.is_empty() {
                println!("No updates provided.");
                return Ok(());
            }

            let pool = DbPool::new(&cfg.database)?;
            match projects::update_project(&pool.conn, *id, &patch)? {
                Some(_) => {
                    success(format!("Project {} updated.", id));
                    audit(&pool, "update", &format!("project {}", id), "Updated project");
                }
                None => warning("Project not found."),
            }
        }

        Commands::DeleteProject { id } => {
            let pool = DbPool::new(&cfg.database)?;
            if projects::delete_project(&pool.conn, *id)? {
                success(format!("Project {} deleted.", id));
                audit(&pool, "delete", &format!("project {}", id), "Deleted project");
            } else {
                warning("Project not found.");
            }
        }

        _ => {}
    }

    Ok(())
}
