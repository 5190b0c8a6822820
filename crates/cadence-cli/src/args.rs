use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands, TemplateCommands, UserCommands};

/// Command-line interface for the cadence training planner
///
/// Admins author templates made of ordered tasks; users turn a template into
/// a personal plan that spreads its tasks over the days before a deadline and
/// tick tasks off as they go.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Email of the registered user acting on plans, tasks and templates
    #[arg(long, global = true, value_name = "EMAIL")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the cadence CLI
///
/// Without a command the acting user's plans in progress are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Register and inspect users
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage templates (admin only for changes)
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Manage template tasks and track them inside plans
    #[command(alias = "k")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Generate and follow plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
