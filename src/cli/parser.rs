use crate::export::{ExportEntity, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for SiteLogger
/// CLI application to keep construction-site records with SQLite
#[derive(Parser)]
#[command(
    name = "sitelogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple site record-keeping CLI: track projects, daily logs, workers and tasks using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check that the configuration file parses")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export one entity table to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, value_enum, help = "Which table to export")]
        entity: ExportEntity,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Interactive menu over the same records
    Menu,

    // ---------- Projects ----------
    /// Create a new project
    AddProject {
        #[arg(long)]
        name: String,

        #[arg(long)]
        location: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,
    },

    /// List all projects
    ShowProjects,

    /// Show one project by id
    GetProject { id: i64 },

    /// Update fields of a project; absent flags leave the field unchanged
    UpdateProject {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        start_date: Option<String>,

        #[arg(long)]
        end_date: Option<String>,
    },

    /// Delete a project (its daily logs, workers and tasks are kept)
    DeleteProject { id: i64 },

    // ---------- Daily logs ----------
    /// Create a new daily log for a project
    AddDailyLog {
        /// Log date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long)]
        weather: String,

        #[arg(long)]
        summary: String,

        #[arg(long)]
        project_id: i64,
    },

    /// List all daily logs
    ShowDailyLogs,

    /// Show one daily log by id
    GetDailyLog { id: i64 },

    /// Update fields of a daily log; absent flags leave the field unchanged
    UpdateDailyLog {
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        weather: Option<String>,

        #[arg(long)]
        summary: Option<String>,

        #[arg(long)]
        project_id: Option<i64>,
    },

    /// Delete a daily log (its tasks are kept)
    DeleteDailyLog { id: i64 },

    // ---------- Workers ----------
    /// Register a new worker
    AddWorker {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        project_id: Option<i64>,
    },

    /// List all workers
    ShowWorkers,

    /// Show one worker by id
    GetWorker { id: i64 },

    /// Update fields of a worker; absent flags leave the field unchanged
    UpdateWorker {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        project_id: Option<i64>,
    },

    /// Delete a worker (their tasks are kept)
    DeleteWorker { id: i64 },

    // ---------- Tasks ----------
    /// Create a new task tied to a daily log and a worker
    AddTask {
        #[arg(long)]
        description: String,

        #[arg(long)]
        hours: f64,

        /// Free-text status label; defaults to the configured one
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        log_id: i64,

        #[arg(long)]
        worker_id: i64,
    },

    /// List all tasks
    ShowTasks,

    /// Show one task by id
    GetTask { id: i64 },

    /// Update fields of a task; absent flags leave the field unchanged
    UpdateTask {
        id: i64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        hours: Option<f64>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        log_id: Option<i64>,

        #[arg(long)]
        worker_id: Option<i64>,
    },

    /// Delete a task
    DeleteTask { id: i64 },
}
