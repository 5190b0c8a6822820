//! Cadence CLI Application
//!
//! Command-line front end for the cadence training planner.

mod args;
mod cli;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{PlannerBuilder, params::ListPlans};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer, user);

    info!("Cadence started");

    match command {
        Some(User { command }) => cli.handle_user_command(command).await,
        Some(Template { command }) => cli.handle_template_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        None => cli.list_plans(&ListPlans::default()).await,
    }
}
