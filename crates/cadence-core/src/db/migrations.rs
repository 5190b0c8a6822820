//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

const STATUS_UNIQUE_INDEX: &str = "idx_user_task_status_unique";

const CHECK_INDEX_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = ?1)";
// A completed duplicate wins over a pending one.
const MERGE_DUPLICATE_STATUS_SQL: &str = "UPDATE user_task_status SET completed = 1
     WHERE completed = 0 AND EXISTS (
         SELECT 1 FROM user_task_status other
         WHERE other.user_id = user_task_status.user_id
           AND other.plan_id = user_task_status.plan_id
           AND other.task_id = user_task_status.task_id
           AND other.completed = 1)";
const DELETE_DUPLICATE_STATUS_SQL: &str = "DELETE FROM user_task_status
     WHERE rowid NOT IN (
         SELECT MIN(rowid) FROM user_task_status GROUP BY user_id, plan_id, task_id)";
const CREATE_STATUS_UNIQUE_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_user_task_status_unique
     ON user_task_status(user_id, plan_id, task_id)";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        let has_unique_index: bool = self
            .connection
            .query_row(CHECK_INDEX_EXISTS_SQL, [STATUS_UNIQUE_INDEX], |row| row.get(0))
            .db_context("Failed to inspect status indexes")?;

        if !has_unique_index {
            self.connection
                .execute(MERGE_DUPLICATE_STATUS_SQL, [])
                .db_context("Failed to merge duplicate task statuses")?;
            let removed = self
                .connection
                .execute(DELETE_DUPLICATE_STATUS_SQL, [])
                .db_context("Failed to remove duplicate task statuses")?;
            if removed > 0 {
                info!("Removed {removed} duplicate task status rows");
            }
            self.connection
                .execute(CREATE_STATUS_UNIQUE_INDEX_SQL, [])
                .db_context("Failed to create task status unique index")?;
        }

        Ok(())
    }
}
