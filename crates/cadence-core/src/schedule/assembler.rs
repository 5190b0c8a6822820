//! Validation and generation of a new plan from a template.
//!
//! [`assemble_plan`] performs every business check before anything is
//! written; the repository then persists the returned [`PlanDraft`] in a
//! single transaction.

use jiff::Timestamp;
use log::{debug, info};

use super::{calendar, weeks::build_weeks};
use crate::{
    error::{CadenceError, Result},
    models::{Plan, Template, UserTaskStatus, new_id},
};

/// A fully generated plan that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    /// Plan with its week/day/day-task graph
    pub plan: Plan,
    /// One pending status per template task
    pub statuses: Vec<UserTaskStatus>,
    /// Number of calendar days covered by the plan
    pub total_days: u32,
    /// Number of 7-day windows covering `total_days`
    pub num_weeks: u32,
}

/// Generates a plan for `user_id` from `template`, ending at `deadline_input`.
///
/// Checks run in order and the first failure wins:
///
/// 1. the deadline must parse
/// 2. it must lie after `now`
/// 3. it must lie strictly after `now + prep_time` days
/// 4. the covered day count must reach `prep_time`
///
/// Every template task receives a pending [`UserTaskStatus`], whether or not
/// it could be scheduled into a day.
///
/// # Errors
///
/// Returns `CadenceError::InvalidInput` for every rejected deadline.
pub fn assemble_plan(
    template: &Template,
    deadline_input: &str,
    user_id: &str,
    now: Timestamp,
) -> Result<PlanDraft> {
    let deadline = calendar::parse_deadline(deadline_input)?;
    let start_date = now;

    if deadline <= start_date {
        return Err(CadenceError::invalid_input("deadline")
            .with_reason("Selected date must be in the future"));
    }

    let min_allowed = calendar::add_days_to_timestamp(start_date, template.prep_time)?;
    if deadline <= min_allowed {
        return Err(CadenceError::invalid_input("deadline").with_reason(format!(
            "Deadline must be later than {} for a template with {} days of preparation",
            min_allowed, template.prep_time
        )));
    }

    let total_days = calendar::whole_days_between(deadline, start_date) + 1;
    if total_days < i64::from(template.prep_time) {
        return Err(CadenceError::invalid_input("deadline").with_reason(format!(
            "Minimum days required for this plan is {}",
            template.prep_time
        )));
    }
    let total_days = u32::try_from(total_days).map_err(|_| {
        CadenceError::invalid_input("deadline").with_reason("Deadline is too far in the future")
    })?;
    let num_weeks = total_days.div_ceil(7);

    let tasks = template.ordered_tasks();
    let plan_id = new_id();
    debug!(
        "assembling plan {plan_id}: {} tasks over {total_days} days in {num_weeks} weeks",
        tasks.len()
    );

    let weeks = build_weeks(
        &plan_id,
        &tasks,
        calendar::utc_date(start_date),
        num_weeks,
        total_days,
    )?;

    let statuses = tasks
        .iter()
        .map(|task| UserTaskStatus::pending(user_id, &plan_id, &task.id))
        .collect();

    info!("Generated plan {plan_id} from template {}", template.id);

    Ok(PlanDraft {
        plan: Plan {
            id: plan_id,
            user_id: user_id.to_string(),
            template_id: template.id.clone(),
            template_name: Some(template.name.clone()),
            deadline,
            start_date,
            weeks,
        },
        statuses,
        total_days,
        num_weeks,
    })
}
