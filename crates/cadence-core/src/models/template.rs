//! Template model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// An admin-authored, reusable sequence of tasks with a lead-time policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Unique identifier for the template
    pub id: String,

    /// Display name of the template
    pub name: String,

    /// Minimum lead time, in whole days, between plan creation and deadline
    pub prep_time: u32,

    /// Freeform description of the ideal prerequisites
    pub ideal_pre_req: Option<String>,

    /// Nominal duration of the whole programme
    pub duration: Option<u32>,

    /// Timestamp when the template was created (UTC)
    pub created_at: Timestamp,

    /// Tasks ordered by creation time
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Template {
    /// Returns the template's tasks in canonical order.
    ///
    /// Tasks are ordered by creation timestamp; the sort is stable so tasks
    /// sharing a timestamp keep their load order.
    pub fn ordered_tasks(&self) -> Vec<Task> {
        let mut tasks = self.tasks.clone();
        tasks.sort_by_key(|task| task.created_at);
        tasks
    }
}
