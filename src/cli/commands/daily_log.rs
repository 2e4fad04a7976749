use crate::cli::commands::{audit, parse_opt_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::daily_logs;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLogPatch;
use crate::ui::messages::{success, warning};
use crate::ui::tables;
use crate::utils::date;

/// Daily log CRUD commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddDailyLog {
            date: date_str,
            weather,
            summary,
            project_id,
        } => {
            let d =
                date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

            let pool = DbPool::new(&cfg.database)?;
            let log = daily_logs::create_daily_log(&pool.conn, d, weather, summary, *project_id)?;

            success(format!(
                "Created daily log {} for project {}",
                log.id, log.project_id
            ));
            audit(
                &pool,
                "add",
                &format!("daily log {}", log.id),
                &format!("Created daily log for project {}", log.project_id),
            );
        }

        Commands::ShowDailyLogs => {
            let pool = DbPool::new(&cfg.database)?;
            let all = daily_logs::list_daily_logs(&pool.conn)?;

            if all.is_empty() {
                println!("No daily logs found.");
            } else {
                print!("{}", tables::daily_log_table(&all));
            }
        }

        Commands::GetDailyLog { id } => {
            let pool = DbPool::new(&cfg.database)?;
            match daily_logs::get_daily_log(&pool.conn, *id)? {
                Some(l) => {
                    println!("ID:      {}", l.id);
                    println!("Date:    {}", date::fmt_date(&l.date));
                    println!("Weather: {}", l.weather);
                    println!("Summary: {}", l.summary);
                    println!("Project: {}", l.project_id);
                }
                None => warning("Daily log not found."),
            }
        }

        Commands::UpdateDailyLog {
            id,
            date: date_str,
            weather,
            summary,
            project_id,
        } => {
            let patch = DailyLogPatch {
                date: parse_opt_date(date_str)?,
                weather: weather.clone(),
                summary: summary.clone(),
                project_id: *project_id,
            };

            if patch.is_empty() {
                println!("No updates provided.");
                return Ok(());
            }

            let pool = DbPool::new(&cfg.database)?;
            match daily_logs::update_daily_log(&pool.conn, *id, &patch)? {
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

        Commands::DeleteDailyLog { id } => {
            let pool = DbPool::new(&cfg.database)?;
            if daily_logs::delete_daily_log(&pool.conn, *id)? {
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

        _ => {}
    }

    Ok(())
}
