//! Template operations for the Planner.

use super::{Planner, non_negative, required_text};
use crate::{
    display::TemplateSummaries,
    error::{CadenceError, Result},
    models::{Page, Role, Template, User},
    params::{CreateTemplate, Id, ListTemplates, UpdateTemplate},
};

impl Planner {
    /// Creates an empty template.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for a blank name or a negative
    /// prep time or duration.
    pub async fn create_template(&self, params: &CreateTemplate) -> Result<Template> {
        let name = required_text("name", &params.name)?;
        let prep_time = non_negative("prep_time", params.prep_time)?;
        let duration = params
            .duration
            .map(|d| non_negative("duration", d))
            .transpose()?;
        let ideal_pre_req = params.ideal_pre_req.clone();

        self.with_database(move |db| {
            db.create_template(&name, prep_time, ideal_pre_req.as_deref(), duration)
        })
        .await
    }

    /// Updates the given fields of a template.
    pub async fn update_template(&self, params: &UpdateTemplate) -> Result<Template> {
        let id = params.id.clone();
        let name = params
            .name
            .as_deref()
            .map(|n| required_text("name", n))
            .transpose()?;
        let prep_time = params
            .prep_time
            .map(|p| non_negative("prep_time", p))
            .transpose()?;
        let duration = params
            .duration
            .map(|d| non_negative("duration", d))
            .transpose()?;
        let ideal_pre_req = params.ideal_pre_req.clone();

        self.with_database(move |db| {
            db.update_template(
                &id,
                name.as_deref(),
                prep_time,
                ideal_pre_req.as_deref(),
                duration,
            )
        })
        .await
    }

    /// Lists template summaries for `viewer`.
    ///
    /// Viewers holding the `USER` role only see templates that have tasks.
    pub async fn list_templates(
        &self,
        params: &ListTemplates,
        viewer: &User,
    ) -> Result<TemplateSummaries> {
        let page = Page::new(params.offset, params.limit, Page::TEMPLATES);
        let hide_empty = viewer.has_role(Role::User);

        let summaries = self
            .with_database(move |db| db.list_template_summaries(hide_empty, page))
            .await?;
        Ok(TemplateSummaries(summaries))
    }

    /// Retrieves a template with its tasks in creation order.
    pub async fn get_template(&self, params: &Id) -> Result<Template> {
        let id = params.id.clone();
        self.with_database(move |db| {
            db.get_template(&id)?
                .ok_or_else(|| CadenceError::not_found("Template", id.as_str()))
        })
        .await
    }

    /// Deletes a template, its tasks and every plan generated from it.
    pub async fn delete_template(&self, params: &Id) -> Result<Template> {
        let id = params.id.clone();
        self.with_database(move |db| db.delete_template(&id)).await
    }
}
