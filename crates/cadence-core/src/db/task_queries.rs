//! Task CRUD operations and plan-scoped task removal.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use super::{media_column, timestamp_column, u32_column};
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{Task, new_id},
};

const CHECK_TEMPLATE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM templates WHERE id = ?1)";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (id, template_id, title, duration, description, media, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASK_SQL: &str = "SELECT id, template_id, title, duration, description, media, created_at FROM tasks WHERE id = ?1";
const SELECT_TASKS_BY_TEMPLATE_SQL: &str = "SELECT id, template_id, title, duration, description, media, created_at FROM tasks WHERE template_id = ?1 ORDER BY rowid";
const UPDATE_TASK_SQL: &str =
    "UPDATE tasks SET title = ?1, duration = ?2, description = ?3, media = ?4 WHERE id = ?5";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const CHECK_PLAN_OWNER_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1 AND user_id = ?2)";
const DELETE_PLAN_DAY_TASKS_SQL: &str = "DELETE FROM day_tasks WHERE task_id = ?2 AND day_id IN (
         SELECT d.id FROM days d JOIN weeks w ON w.id = d.week_id WHERE w.plan_id = ?1)";
const DELETE_EMPTY_DAYS_SQL: &str = "DELETE FROM days WHERE week_id IN (SELECT id FROM weeks WHERE plan_id = ?1)
       AND NOT EXISTS (SELECT 1 FROM day_tasks dt WHERE dt.day_id = days.id)";
const DELETE_EMPTY_WEEKS_SQL: &str = "DELETE FROM weeks WHERE plan_id = ?1
       AND NOT EXISTS (SELECT 1 FROM days d WHERE d.week_id = weeks.id)";

impl super::Database {
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            template_id: row.get(1)?,
            title: row.get(2)?,
            duration: u32_column(row, 3)?,
            description: row.get(4)?,
            media: media_column(row, 5)?,
            created_at: timestamp_column(row, 6)?,
        })
    }

    /// Adds a task to a template.
    pub fn create_task(
        &mut self,
        template_id: &str,
        title: &str,
        duration: u32,
        description: Option<&str>,
        media: &[String],
    ) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let template_exists: bool = tx
            .query_row(CHECK_TEMPLATE_EXISTS_SQL, params![template_id], |row| {
                row.get(0)
            })
            .db_context("Failed to check template existence")?;
        if !template_exists {
            return Err(CadenceError::not_found("Template", template_id));
        }

        let id = new_id();
        let now = Timestamp::now();
        let media_json = serde_json::to_string(media)?;

        tx.execute(
            INSERT_TASK_SQL,
            params![
                &id,
                template_id,
                title,
                duration,
                description,
                &media_json,
                now.to_string()
            ],
        )
        .db_context("Failed to insert task")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            template_id: template_id.to_string(),
            title: title.to_string(),
            duration,
            description: description.map(String::from),
            media: media.to_vec(),
            created_at: now,
        })
    }

    /// Retrieves a task by id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        self.connection
            .query_row(SELECT_TASK_SQL, params![id], Self::build_task_from_row)
            .optional()
            .db_context("Failed to query task")
    }

    /// Retrieves the tasks of a template ordered by creation time.
    pub fn get_tasks_for_template(&self, template_id: &str) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_BY_TEMPLATE_SQL)
            .db_context("Failed to prepare query")?;

        let mut tasks: Vec<Task> = stmt
            .query_map(params![template_id], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to fetch tasks")?;

        tasks.sort_by_key(|task| task.created_at);
        Ok(tasks)
    }

    /// Updates the fields of a task that are given.
    pub fn update_task(
        &mut self,
        id: &str,
        title: Option<&str>,
        duration: Option<u32>,
        description: Option<&str>,
        media: Option<&[String]>,
    ) -> Result<Task> {
        let mut task = self
            .get_task(id)?
            .ok_or_else(|| CadenceError::not_found("Task", id))?;

        if let Some(title) = title {
            task.title = title.to_string();
        }
        if let Some(duration) = duration {
            task.duration = duration;
        }
        if let Some(description) = description {
            task.description = Some(description.to_string());
        }
        if let Some(media) = media {
            task.media = media.to_vec();
        }

        let media_json = serde_json::to_string(&task.media)?;
        self.connection
            .execute(
                UPDATE_TASK_SQL,
                params![
                    &task.title,
                    task.duration,
                    task.description.as_deref(),
                    &media_json,
                    id
                ],
            )
            .db_context("Failed to update task")?;

        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Its day-task assignments and completion rows in every plan go with it.
    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        let task = self
            .get_task(id)?
            .ok_or_else(|| CadenceError::not_found("Task", id))?;

        self.connection
            .execute(DELETE_TASK_SQL, params![id])
            .db_context("Failed to delete task")?;

        Ok(task)
    }

    /// Unschedules a task from one of the user's plans.
    ///
    /// Days and weeks emptied by the removal are deleted in the same
    /// transaction. The task itself and its completion row are kept.
    pub fn remove_task_from_plan(
        &mut self,
        plan_id: &str,
        task_id: &str,
        user_id: &str,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let owned: bool = tx
            .query_row(CHECK_PLAN_OWNER_SQL, params![plan_id, user_id], |row| {
                row.get(0)
            })
            .db_context("Failed to check plan ownership")?;
        if !owned {
            return Err(CadenceError::not_found("Plan", plan_id));
        }

        let removed = tx
            .execute(DELETE_PLAN_DAY_TASKS_SQL, params![plan_id, task_id])
            .db_context("Failed to remove task from plan")?;
        if removed == 0 {
            return Err(CadenceError::not_found("Task in plan", task_id));
        }

        tx.execute(DELETE_EMPTY_DAYS_SQL, params![plan_id])
            .db_context("Failed to prune empty days")?;
        tx.execute(DELETE_EMPTY_WEEKS_SQL, params![plan_id])
            .db_context("Failed to prune empty weeks")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
