//! Plan operations for the Planner.

use jiff::Timestamp;
use log::info;

use super::Planner;
use crate::{
    db::Database,
    display::PlanProgressList,
    error::{CadenceError, Result},
    models::{CompletionFilter, Page, PlanProgress, PlanView, User},
    params::{CreatePlan, Id, ListPlans},
    schedule::{compose_plan_view, list_progress},
};

/// Composes the current view of one of `user_id`'s plans.
fn load_view(db: &Database, plan_id: &str, user_id: &str, now: Timestamp) -> Result<PlanView> {
    let plan = db
        .get_plan_for_user(plan_id, user_id)?
        .ok_or_else(|| CadenceError::not_found("Plan", plan_id))?;
    let statuses = db.get_statuses(plan_id, user_id)?;
    Ok(compose_plan_view(&plan, &statuses, now))
}

impl Planner {
    /// Generates a plan from a template for `user` and returns its view.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::NotFound` for an unknown template and
    /// `CadenceError::InvalidInput` when the deadline is rejected.
    pub async fn create_plan(&self, params: &CreatePlan, user: &User) -> Result<PlanView> {
        let template_id = params.template_id.clone();
        let deadline = params.deadline.clone();
        let user_id = user.id.clone();

        self.with_database(move |db| {
            let now = Timestamp::now();
            let plan = db.create_plan(&template_id, &deadline, &user_id, now)?;
            load_view(db, &plan.id, &user_id, now)
        })
        .await
    }

    /// Retrieves the composed view of one of the user's plans.
    pub async fn get_plan_view(&self, params: &Id, user: &User) -> Result<PlanView> {
        let plan_id = params.id.clone();
        let user_id = user.id.clone();

        self.with_database(move |db| load_view(db, &plan_id, &user_id, Timestamp::now()))
            .await
    }

    /// Lists the user's plans of one completion class, by ascending deadline.
    pub async fn list_plans(&self, params: &ListPlans, user: &User) -> Result<PlanProgressList> {
        let filter = if params.completed {
            CompletionFilter::Completed
        } else {
            CompletionFilter::Uncompleted
        };
        let page = Page::new(params.offset, params.limit, Page::PLANS);

        let entries = self.list_plan_progress(user, filter, page).await?;
        Ok(PlanProgressList::new(filter, entries))
    }

    /// Lists the user's plans whose every task is completed.
    pub async fn list_completed_plans(&self, user: &User, page: Page) -> Result<Vec<PlanProgress>> {
        self.list_plan_progress(user, CompletionFilter::Completed, page)
            .await
    }

    /// Lists the user's plans with work left, including plans without tasks.
    pub async fn list_uncompleted_plans(
        &self,
        user: &User,
        page: Page,
    ) -> Result<Vec<PlanProgress>> {
        self.list_plan_progress(user, CompletionFilter::Uncompleted, page)
            .await
    }

    async fn list_plan_progress(
        &self,
        user: &User,
        filter: CompletionFilter,
        page: Page,
    ) -> Result<Vec<PlanProgress>> {
        let user_id = user.id.clone();

        self.with_database(move |db| {
            let now = Timestamp::now();
            let plans = db.list_plans_for_user(&user_id)?;
            let statuses = db.get_statuses_for_user(&user_id)?;
            let views = plans
                .iter()
                .map(|plan| compose_plan_view(plan, &statuses, now))
                .collect();
            Ok(list_progress(views, filter, page))
        })
        .await
    }

    /// Deletes one of the user's plans with its whole graph and statuses.
    pub async fn delete_plan(&self, params: &Id, user: &User) -> Result<()> {
        let plan_id = params.id.clone();
        let user_id = user.id.clone();

        self.with_database(move |db| db.delete_plan(&plan_id, &user_id))
            .await?;
        info!("Deleted plan {} of user {}", params.id, user.id);
        Ok(())
    }

    /// Deletes any plan regardless of its owner.
    pub async fn delete_plan_admin(&self, params: &Id) -> Result<()> {
        let plan_id = params.id.clone();

        self.with_database(move |db| db.delete_plan_admin(&plan_id))
            .await?;
        info!("Deleted plan {} as admin", params.id);
        Ok(())
    }
}
