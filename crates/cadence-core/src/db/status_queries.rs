//! Completion status queries.

use rusqlite::{OptionalExtension, params};

use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::UserTaskStatus,
};

const SELECT_STATUS_COLUMNS: &str = "SELECT id, user_id, plan_id, task_id, completed FROM user_task_status";
const UPDATE_STATUS_SQL: &str = "UPDATE user_task_status SET completed = ?1 WHERE plan_id = ?2 AND task_id = ?3 AND user_id = ?4";

impl super::Database {
    fn build_status_from_row(row: &rusqlite::Row) -> rusqlite::Result<UserTaskStatus> {
        Ok(UserTaskStatus {
            id: row.get(0)?,
            user_id: row.get(1)?,
            plan_id: row.get(2)?,
            task_id: row.get(3)?,
            completed: row.get(4)?,
        })
    }

    /// Retrieves the user's completion rows for one plan.
    pub fn get_statuses(&self, plan_id: &str, user_id: &str) -> Result<Vec<UserTaskStatus>> {
        self.query_statuses(
            &format!("{SELECT_STATUS_COLUMNS} WHERE plan_id = ?1 AND user_id = ?2 ORDER BY rowid"),
            params![plan_id, user_id],
        )
    }

    /// Retrieves every completion row of a user across plans.
    pub fn get_statuses_for_user(&self, user_id: &str) -> Result<Vec<UserTaskStatus>> {
        self.query_statuses(
            &format!("{SELECT_STATUS_COLUMNS} WHERE user_id = ?1 ORDER BY rowid"),
            params![user_id],
        )
    }

    fn query_statuses(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<UserTaskStatus>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        stmt.query_map(params, Self::build_status_from_row)
            .db_context("Failed to query task statuses")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch task statuses")
    }

    /// Sets the completion flag of the user's status row for a plan task.
    pub fn set_task_completed(
        &mut self,
        plan_id: &str,
        task_id: &str,
        user_id: &str,
        completed: bool,
    ) -> Result<UserTaskStatus> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated = tx
            .execute(UPDATE_STATUS_SQL, params![completed, plan_id, task_id, user_id])
            .db_context("Failed to update task status")?;
        if updated == 0 {
            return Err(CadenceError::not_found("Task status", task_id));
        }

        let status = tx
            .query_row(
                &format!(
                    "{SELECT_STATUS_COLUMNS} WHERE plan_id = ?1 AND task_id = ?2 AND user_id = ?3"
                ),
                params![plan_id, task_id, user_id],
                Self::build_status_from_row,
            )
            .optional()
            .db_context("Failed to query task status")?
            .ok_or_else(|| CadenceError::not_found("Task status", task_id))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(status)
    }
}
