//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions. Every implementation emits
//! markdown for the terminal renderer.

use std::fmt;

use super::datetime::UtcDateTime;
use crate::models::{
    PlanProgress, PlanTask, PlanView, Role, ScheduledTask, Task, TaskView, Template,
    TemplateSummary, User,
};

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.email, self.id)?;
        writeln!(f)?;
        let roles: Vec<&str> = self.roles.iter().map(Role::as_str).collect();
        writeln!(f, "- Roles: {}", roles.join(", "))?;
        writeln!(f, "- Registered: {}", UtcDateTime(&self.created_at))
    }
}

fn completion_marker(completed: bool) -> &'static str {
    if completed { "✓" } else { "○" }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Duration: {} min", self.duration)?;
        writeln!(f, "- Created: {}", UtcDateTime(&self.created_at))?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if !self.media.is_empty() {
            writeln!(f, "#### Media")?;
            writeln!(f)?;
            for item in &self.media {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Prep time: {} days", self.prep_time)?;
        if let Some(duration) = self.duration {
            writeln!(f, "- Duration: {duration}")?;
        }
        writeln!(f, "- Created: {}", UtcDateTime(&self.created_at))?;

        if let Some(pre_req) = &self.ideal_pre_req {
            writeln!(f)?;
            writeln!(f, "{pre_req}")?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this template.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TemplateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({} tasks)",
            self.name, self.id, self.task_count
        )?;
        writeln!(f)?;
        writeln!(f, "- **Prep time**: {} days", self.prep_time)?;
        writeln!(f, "- **Created**: {}", UtcDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} min, ID: {})",
            completion_marker(self.completed),
            self.task.title,
            self.task.duration,
            self.task.id
        )
    }
}

impl fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.task.task.title, self.date)
    }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title.as_deref().unwrap_or("Untitled plan");
        writeln!(f, "# {title} (ID: {})", self.plan_id)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Progress: {}/{} tasks completed",
            self.completed_tasks, self.total_tasks
        )?;
        writeln!(f, "- Started: {}", UtcDateTime(&self.start_date))?;
        writeln!(f, "- Deadline: {}", UtcDateTime(&self.deadline))?;
        writeln!(f, "- Days left: {} of {}", self.days_left, self.total_days)?;
        match &self.upcoming_task {
            Some(next) => writeln!(f, "- Up next: {next}")?,
            None => writeln!(f, "- Up next: nothing scheduled")?,
        }

        if self.weeks.is_empty() {
            writeln!(f, "\nNo tasks scheduled in this plan.")?;
            return Ok(());
        }

        for (order, week) in self.weeks.iter().enumerate() {
            writeln!(f, "\n## Week {}", order + 1)?;
            for day in &week.days {
                writeln!(f)?;
                writeln!(f, "### {}", day.date)?;
                writeln!(f)?;
                for task in &day.tasks {
                    writeln!(f, "- {task}")?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Untitled plan");
        writeln!(
            f,
            "## {name} (ID: {}) ({}/{})",
            self.id, self.completed_tasks, self.total_tasks
        )?;
        writeln!(f)?;
        writeln!(f, "- **Deadline**: {}", UtcDateTime(&self.deadline))?;
        if let Some(next) = &self.upcoming_task {
            writeln!(f, "- **Up next**: {next}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.task.completed {
            "✓ Completed"
        } else {
            "○ Pending"
        };
        writeln!(f, "# {} (ID: {})", self.task.task.title, self.task.task.id)?;
        writeln!(f)?;
        writeln!(f, "- Plan: {}", self.plan_id)?;
        writeln!(f, "- Week: {}", self.week_order)?;
        writeln!(f, "- Date: {}", self.date)?;
        writeln!(f, "- Status: {status}")?;
        writeln!(f, "- Duration: {} min", self.task.task.duration)?;

        if let Some(desc) = &self.task.task.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}
