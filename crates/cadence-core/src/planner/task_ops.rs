//! Task operations for the Planner.

use jiff::Timestamp;
use log::info;

use super::{Planner, non_negative, required_text};
use crate::{
    error::{CadenceError, Result},
    models::{PlanTask, Task, User, UserTaskStatus},
    params::{CreateTask, Id, PlanTaskRef, UpdateTask},
    schedule::{compose_plan_view, locate_task},
};

impl Planner {
    /// Adds a task to a template.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        let template_id = params.template_id.clone();
        let title = required_text("title", &params.title)?;
        let duration = non_negative("duration", params.duration)?;
        let description = params.description.clone();
        let media = params.media.clone();

        self.with_database(move |db| {
            db.create_task(
                &template_id,
                &title,
                duration,
                description.as_deref(),
                &media,
            )
        })
        .await
    }

    /// Updates the given fields of a task.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        let id = params.id.clone();
        let title = params
            .title
            .as_deref()
            .map(|t| required_text("title", t))
            .transpose()?;
        let duration = params
            .duration
            .map(|d| non_negative("duration", d))
            .transpose()?;
        let description = params.description.clone();
        let media = params.media.clone();

        self.with_database(move |db| {
            db.update_task(
                &id,
                title.as_deref(),
                duration,
                description.as_deref(),
                media.as_deref(),
            )
        })
        .await
    }

    /// Deletes a task together with its assignments and statuses in every
    /// plan.
    pub async fn delete_task(&self, params: &Id) -> Result<Task> {
        let id = params.id.clone();
        self.with_database(move |db| db.delete_task(&id)).await
    }

    /// Marks a task of one of the user's plans as completed.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::NotFound` when the user has no status row for
    /// the task in that plan.
    pub async fn complete_task(&self, params: &PlanTaskRef, user: &User) -> Result<UserTaskStatus> {
        let plan_id = params.plan_id.clone();
        let task_id = params.task_id.clone();
        let user_id = user.id.clone();

        let status = self
            .with_database(move |db| db.set_task_completed(&plan_id, &task_id, &user_id, true))
            .await?;
        info!("Completed task {} in plan {}", status.task_id, status.plan_id);
        Ok(status)
    }

    /// Locates a task in one of the user's plans with its completion flag,
    /// week order and date.
    pub async fn get_plan_task(&self, params: &PlanTaskRef, user: &User) -> Result<PlanTask> {
        let plan_id = params.plan_id.clone();
        let task_id = params.task_id.clone();
        let user_id = user.id.clone();

        self.with_database(move |db| {
            let plan = db
                .get_plan_for_user(&plan_id, &user_id)?
                .ok_or_else(|| CadenceError::not_found("Plan", plan_id.as_str()))?;
            let statuses = db.get_statuses(&plan_id, &user_id)?;
            let view = compose_plan_view(&plan, &statuses, Timestamp::now());
            locate_task(&view, &task_id)
                .ok_or_else(|| CadenceError::not_found("Task in plan", task_id.as_str()))
        })
        .await
    }

    /// Unschedules a task from one of the user's plans only.
    pub async fn remove_task_from_plan(&self, params: &PlanTaskRef, user: &User) -> Result<()> {
        let plan_id = params.plan_id.clone();
        let task_id = params.task_id.clone();
        let user_id = user.id.clone();

        self.with_database(move |db| db.remove_task_from_plan(&plan_id, &task_id, &user_id))
            .await
    }
}
