//! SiteLogger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Menu => cli::commands::menu::handle(cfg),

        Commands::AddProject { .. }
        | Commands::ShowProjects
        | Commands::GetProject { .. }
        | Commands::UpdateProject { .. }
        | Commands::DeleteProject { .. } => cli::commands::project::handle(&cli.command, cfg),

        Commands::AddDailyLog { .. }
        | Commands::ShowDailyLogs
        | Commands::GetDailyLog { .. }
        | Commands::UpdateDailyLog { .. }
        | Commands::DeleteDailyLog { .. } => cli::commands::daily_log::handle(&cli.command, cfg),

        Commands::AddWorker { .. }
        | Commands::ShowWorkers
        | Commands::GetWorker { .. }
        | Commands::UpdateWorker { .. }
        | Commands::DeleteWorker { .. } => cli::commands::worker::handle(&cli.command, cfg),

        Commands::AddTask { .. }
        | Commands::ShowTasks
        | Commands::GetTask { .. }
        | Commands::UpdateTask { .. }
        | Commands::DeleteTask { .. } => cli::commands::task::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once, then apply the optional --db override.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
