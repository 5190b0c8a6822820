//! Data models for users, templates, tasks and plans.
//!
//! The persisted entities form a strict ownership tree for every plan:
//!
//! ```text
//! Plan ──▶ Week ──▶ Day ──▶ DayTask ──ref──▶ Task ◀── Template
//!   └──────────────▶ UserTaskStatus (one per user/plan/task)
//! ```
//!
//! A [`Plan`] exclusively owns its weeks, days and day-task assignments.
//! Tasks belong to their [`Template`] and are only referenced by plans, so a
//! task outlives any plan generated from it. Completion is never recorded on
//! the tree itself; it lives in [`UserTaskStatus`] rows and is merged in by the
//! view composer ([`crate::schedule::view`]) to produce the read-side types in
//! [`view`].
//!
//! Display implementations for these models are located in
//! [`crate::display::models`].
//!
//! # Identifiers
//!
//! Every id is an opaque UUID v4 string created with [`new_id`]. Ids carry no
//! ordering; tasks are ordered by their creation timestamp instead.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{Role, Task};
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: cadence_core::models::new_id(),
//!     template_id: cadence_core::models::new_id(),
//!     title: "Warm-up run".to_string(),
//!     duration: 30,
//!     description: None,
//!     media: vec![],
//!     created_at: Timestamp::now(),
//! };
//! assert_eq!(task.title, "Warm-up run");
//! assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
//! ```

pub mod filters;
pub mod plan;
pub mod status;
pub mod summary;
pub mod task;
pub mod template;
pub mod user;
pub mod view;


use uuid::Uuid;

pub use filters::{CompletionFilter, Page};
pub use plan::{Day, DayTask, Plan, Week};
pub use status::{Role, UserTaskStatus};
pub use summary::TemplateSummary;
pub use task::Task;
pub use template::Template;
pub use user::User;
pub use view::{DayView, PlanProgress, PlanTask, PlanView, ScheduledTask, TaskView, WeekView};

/// Generates a fresh opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
