//! Template CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use super::{optional_u32_column, timestamp_column, u32_column};
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{Page, Template, TemplateSummary, new_id},
};

const INSERT_TEMPLATE_SQL: &str = "INSERT INTO templates (id, name, prep_time, ideal_pre_req, duration, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TEMPLATE_SQL: &str =
    "SELECT id, name, prep_time, ideal_pre_req, duration, created_at FROM templates WHERE id = ?1";
const UPDATE_TEMPLATE_SQL: &str = "UPDATE templates SET name = ?1, prep_time = ?2, ideal_pre_req = ?3, duration = ?4 WHERE id = ?5";
const DELETE_TEMPLATE_SQL: &str = "DELETE FROM templates WHERE id = ?1";
// Load order by rowid, creation order is applied afterwards.
const SELECT_TEMPLATE_SUMMARIES_SQL: &str = "SELECT t.id, t.name, t.prep_time, t.created_at, COUNT(k.id)
     FROM templates t LEFT JOIN tasks k ON k.template_id = t.id
     GROUP BY t.id ORDER BY t.rowid";

impl super::Database {
    fn build_template_from_row(row: &rusqlite::Row) -> rusqlite::Result<Template> {
        Ok(Template {
            id: row.get(0)?,
            name: row.get(1)?,
            prep_time: u32_column(row, 2)?,
            ideal_pre_req: row.get(3)?,
            duration: optional_u32_column(row, 4)?,
            created_at: timestamp_column(row, 5)?,
            tasks: Vec::new(),
        })
    }

    /// Creates an empty template.
    pub fn create_template(
        &mut self,
        name: &str,
        prep_time: u32,
        ideal_pre_req: Option<&str>,
        duration: Option<u32>,
    ) -> Result<Template> {
        let now = Timestamp::now();
        let id = new_id();

        self.connection
            .execute(
                INSERT_TEMPLATE_SQL,
                params![&id, name, prep_time, ideal_pre_req, duration, now.to_string()],
            )
            .db_context("Failed to insert template")?;

        Ok(Template {
            id,
            name: name.to_string(),
            prep_time,
            ideal_pre_req: ideal_pre_req.map(String::from),
            duration,
            created_at: now,
            tasks: Vec::new(),
        })
    }

    /// Retrieves a template with its tasks in creation order.
    pub fn get_template(&self, id: &str) -> Result<Option<Template>> {
        let template = self
            .connection
            .query_row(SELECT_TEMPLATE_SQL, params![id], Self::build_template_from_row)
            .optional()
            .db_context("Failed to query template")?;

        match template {
            Some(mut template) => {
                template.tasks = self.get_tasks_for_template(&template.id)?;
                Ok(Some(template))
            }
            None => Ok(None),
        }
    }

    /// Updates the fields of a template that are given.
    pub fn update_template(
        &mut self,
        id: &str,
        name: Option<&str>,
        prep_time: Option<u32>,
        ideal_pre_req: Option<&str>,
        duration: Option<u32>,
    ) -> Result<Template> {
        let mut template = self
            .get_template(id)?
            .ok_or_else(|| CadenceError::not_found("Template", id))?;

        if let Some(name) = name {
            template.name = name.to_string();
        }
        if let Some(prep_time) = prep_time {
            template.prep_time = prep_time;
        }
        if let Some(ideal_pre_req) = ideal_pre_req {
            template.ideal_pre_req = Some(ideal_pre_req.to_string());
        }
        if let Some(duration) = duration {
            template.duration = Some(duration);
        }

        self.connection
            .execute(
                UPDATE_TEMPLATE_SQL,
                params![
                    &template.name,
                    template.prep_time,
                    template.ideal_pre_req.as_deref(),
                    template.duration,
                    id
                ],
            )
            .db_context("Failed to update template")?;

        Ok(template)
    }

    /// Lists template summaries in creation order.
    ///
    /// With `hide_empty` set, templates without tasks are dropped before the
    /// page is applied.
    pub fn list_template_summaries(
        &self,
        hide_empty: bool,
        page: Page,
    ) -> Result<Vec<TemplateSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TEMPLATE_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let mut summaries: Vec<TemplateSummary> = stmt
            .query_map([], |row| {
                Ok(TemplateSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    prep_time: u32_column(row, 2)?,
                    created_at: timestamp_column(row, 3)?,
                    task_count: u32_column(row, 4)?,
                })
            })
            .db_context("Failed to query templates")?
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to fetch templates")?;

        summaries.sort_by_key(|summary| summary.created_at);
        if hide_empty {
            summaries.retain(|summary| summary.task_count > 0);
        }

        Ok(page.apply(summaries))
    }

    /// Deletes a template together with its tasks and every plan generated
    /// from it.
    pub fn delete_template(&mut self, id: &str) -> Result<Template> {
        let template = self
            .get_template(id)?
            .ok_or_else(|| CadenceError::not_found("Template", id))?;

        self.connection
            .execute(DELETE_TEMPLATE_SQL, params![id])
            .db_context("Failed to delete template")?;

        Ok(template)
    }
}
