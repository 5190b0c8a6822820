//! Read-side views composed from a plan aggregate and its completion rows.
//!
//! None of these types are persisted. They are rebuilt on every read by
//! [`crate::schedule::view`].

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::Task;

/// A task together with the reader's completion flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub completed: bool,
}

/// A day with its task views, dated in UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayView {
    pub id: String,
    pub date: Date,
    pub tasks: Vec<TaskView>,
}

/// A week that still carries at least one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekView {
    pub id: String,
    /// Index of the 7-day window within the plan's calendar (0-indexed)
    pub position: u32,
    pub days: Vec<DayView>,
}

/// One flattened (day, task) pair of a plan's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledTask {
    pub day_id: String,
    pub date: Date,
    pub task: TaskView,
}

/// Fully composed plan with derived progress fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanView {
    pub plan_id: String,
    /// Name of the source template
    pub title: Option<String>,
    pub start_date: Timestamp,
    pub deadline: Timestamp,
    /// Whole days until the deadline, rounded up; negative once it has passed
    pub days_left: i64,
    pub total_days: i64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Earliest incomplete task dated today or later
    pub upcoming_task: Option<ScheduledTask>,
    /// Weeks in chronological order
    pub weeks: Vec<WeekView>,
    /// Every (day, task) pair sorted by date
    pub schedule: Vec<ScheduledTask>,
}

impl PlanView {
    /// Returns true when every scheduled task is completed.
    pub fn is_completed(&self) -> bool {
        self.total_tasks > 0 && self.completed_tasks == self.total_tasks
    }
}

/// Compact entry used by plan listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanProgress {
    pub id: String,
    pub name: Option<String>,
    pub deadline: Timestamp,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub upcoming_task: Option<ScheduledTask>,
}

impl From<PlanView> for PlanProgress {
    fn from(view: PlanView) -> Self {
        Self {
            id: view.plan_id,
            name: view.title,
            deadline: view.deadline,
            total_tasks: view.total_tasks,
            completed_tasks: view.completed_tasks,
            upcoming_task: view.upcoming_task,
        }
    }
}

/// A single task located inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTask {
    pub plan_id: String,
    pub task: TaskView,
    /// 1-based order of the week holding the task
    pub week_order: u32,
    pub date: Date,
}
