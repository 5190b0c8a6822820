//! Plan aggregate: plan, weeks, days and day-task assignments.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::Task;

/// A user's concrete instantiation of a template against a deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// ID of the owning user
    pub user_id: String,

    /// ID of the source template
    pub template_id: String,

    /// Name of the source template, filled in when loaded
    #[serde(default)]
    pub template_name: Option<String>,

    /// Deadline chosen by the user (UTC)
    pub deadline: Timestamp,

    /// Creation time of the plan (UTC)
    pub start_date: Timestamp,

    /// Weeks in calendar order
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Plan {
    /// Iterates over every day-task assignment in the plan.
    pub fn day_tasks(&self) -> impl Iterator<Item = (&Week, &Day, &DayTask)> {
        self.weeks.iter().flat_map(|week| {
            week.days
                .iter()
                .flat_map(move |day| day.tasks.iter().map(move |task| (week, day, task)))
        })
    }
}

/// A 7-day window of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// Unique identifier for the week
    pub id: String,

    /// ID of the parent plan
    pub plan_id: String,

    /// Index of the 7-day window within the plan's calendar (0-indexed)
    pub position: u32,

    /// Days carrying at least one task
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A calendar day of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// Unique identifier for the day
    pub id: String,

    /// ID of the parent week
    pub week_id: String,

    /// Calendar date (UTC)
    pub date: Date,

    /// Task assignments in schedule order
    #[serde(default)]
    pub tasks: Vec<DayTask>,
}

/// Assignment of one task to one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayTask {
    /// Unique identifier for the assignment
    pub id: String,

    /// ID of the parent day
    pub day_id: String,

    /// Order of the assignment within its day (0-indexed)
    pub position: u32,

    /// The referenced task
    pub task: Task,
}
