//! Core library for the cadence training-plan planner.
//!
//! Admins author reusable templates made of ordered tasks; users turn a
//! template into a personal plan that spreads the tasks over the days left
//! before a deadline, then tick tasks off as they go.
//!
//! # Layers
//!
//! - [`schedule`]: the pure scheduling core (distribution solver, day and week
//!   builders, plan assembler, plan view composer)
//! - [`db`]: the SQLite repository
//! - [`planner`]: the async facade used by front ends
//! - [`models`], [`params`] and [`display`]: data, inputs and markdown output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::{
//!     PlannerBuilder,
//!     params::{CreatePlan, CreateUser, ListPlans},
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
//! let view = planner
//!     .create_plan(
//!         &CreatePlan {
//!             template_id: "template-id".to_string(),
//!             deadline: "2030-06-01".to_string(),
//!         },
//!         &user,
//!     )
//!     .await?;
//! println!("{view}");
//!
//! let in_progress = planner.list_plans(&ListPlans::default(), &user).await?;
//! println!("{in_progress}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlanProgressList, TemplateSummaries,
    UpdateResult,
};
pub use error::{CadenceError, ErrorKind, Result};
pub use models::{
    CompletionFilter, Page, Plan, PlanProgress, PlanTask, PlanView, Role, Task, Template, User,
    UserTaskStatus,
};
pub use params::{
    CreatePlan, CreateTask, CreateTemplate, CreateUser, Id, ListPlans, ListTemplates,
    PlanTaskRef, UpdateTask, UpdateTemplate,
};
pub use planner::{Planner, PlannerBuilder};
