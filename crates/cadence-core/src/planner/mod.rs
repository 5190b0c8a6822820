//! High-level planner API.
//!
//! [`Planner`] is the async entry point used by every front end. Each method
//! opens a fresh [`Database`] connection on the blocking thread pool, runs one
//! logical unit of work and returns, so suspension only happens at the
//! persistence boundary.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │    Database     │    │    Schedule     │
//! │ (plan_ops,      │───▶│   (via db/)     │───▶│ (assembler,     │
//! │  task_ops, ...) │    │                 │    │  view composer) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances
//! - [`user_ops`]: Registration, lookup and identity checks
//! - [`template_ops`]: Template management
//! - [`task_ops`]: Task management and per-plan task progress
//! - [`plan_ops`]: Plan generation, views and listings
//!
//! # Usage
//!
//! ```rust,no_run
//! use cadence_core::{
//!     PlannerBuilder,
//!     params::{CreatePlan, CreateTask, CreateTemplate, CreateUser},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("cadence.db"))
//!     .build()
//!     .await?;
//!
//! let user = planner
//!     .create_user(&CreateUser {
//!         email: "runner@example.com".to_string(),
//!         roles: vec![],
//!     })
//!     .await?;
//!
//! let template = planner
//!     .create_template(&CreateTemplate {
//!         name: "Couch to 5k".to_string(),
//!         prep_time: 3,
//!         ..Default::default()
//!     })
//!     .await?;
//! planner
//!     .create_task(&CreateTask {
//!         template_id: template.id.clone(),
//!         title: "Walk 20 minutes".to_string(),
//!         duration: 20,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let view = planner
//!     .create_plan(
//!         &CreatePlan {
//!             template_id: template.id,
//!             deadline: "2030-06-01".to_string(),
//!         },
//!         &user,
//!     )
//!     .await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{CadenceError, Result},
};

pub mod builder;
pub mod plan_ops;
pub mod task_ops;
pub mod template_ops;
pub mod user_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for users, templates, tasks and plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs `work` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            work(&mut db)
        })
        .await
        .map_err(|e| CadenceError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Rejects blank text for a required field.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CadenceError::invalid_input(field).with_reason("Must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Converts user supplied numbers, rejecting negatives.
pub(crate) fn non_negative(field: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(CadenceError::invalid_input(field)
            .with_reason(format!("Must not be negative, got {value}")));
    }
    u32::try_from(value)
        .map_err(|_| CadenceError::invalid_input(field).with_reason(format!("{value} is too large")))
}
