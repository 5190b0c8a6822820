//! Plan persistence: transactional creation and aggregate loading.

use jiff::{Timestamp, civil::Date};
use log::{debug, info};
use rusqlite::{Transaction, params};

use super::{date_column, media_column, timestamp_column, u32_column};
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{Day, DayTask, Plan, Task, Week},
    schedule::{PlanDraft, assemble_plan},
};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (id, user_id, template_id, deadline, start_date) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_WEEK_SQL: &str = "INSERT INTO weeks (id, plan_id, position) VALUES (?1, ?2, ?3)";
const INSERT_DAY_SQL: &str = "INSERT INTO days (id, week_id, day_date) VALUES (?1, ?2, ?3)";
const INSERT_DAY_TASK_SQL: &str =
    "INSERT INTO day_tasks (id, day_id, task_id, position) VALUES (?1, ?2, ?3, ?4)";
const UPSERT_STATUS_SQL: &str = "INSERT OR IGNORE INTO user_task_status (id, user_id, plan_id, task_id, completed) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_OWNED_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1 AND user_id = ?2";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

// One row per (plan, week, day, assignment); empty levels come back as NULLs.
const SELECT_PLAN_AGGREGATE_SQL: &str = "SELECT
        p.id, p.user_id, p.template_id, t.name, p.deadline, p.start_date,
        w.id, w.position,
        d.id, d.day_date,
        dt.id, dt.position,
        k.id, k.template_id, k.title, k.duration, k.description, k.media, k.created_at
     FROM plans p
     JOIN templates t ON t.id = p.template_id
     LEFT JOIN weeks w ON w.plan_id = p.id
     LEFT JOIN days d ON d.week_id = w.id
     LEFT JOIN day_tasks dt ON dt.day_id = d.id
     LEFT JOIN tasks k ON k.id = dt.task_id";
const AGGREGATE_ORDER: &str =
    "ORDER BY p.rowid, w.position, w.id, d.day_date, d.id, dt.position, dt.id";

/// One row of the plan aggregate join.
struct AggregateRow {
    plan: Plan,
    week: Option<(String, u32)>,
    day: Option<(String, Date)>,
    assignment: Option<(String, u32, Task)>,
}

impl AggregateRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let plan = Plan {
            id: row.get(0)?,
            user_id: row.get(1)?,
            template_id: row.get(2)?,
            template_name: row.get(3)?,
            deadline: timestamp_column(row, 4)?,
            start_date: timestamp_column(row, 5)?,
            weeks: Vec::new(),
        };

        let week = match row.get::<_, Option<String>>(6)? {
            Some(id) => Some((id, u32_column(row, 7)?)),
            None => None,
        };

        let day = match row.get::<_, Option<String>>(8)? {
            Some(id) => Some((id, date_column(row, 9)?)),
            None => None,
        };

        let assignment = match row.get::<_, Option<String>>(10)? {
            Some(id) => {
                let task = Task {
                    id: row.get(12)?,
                    template_id: row.get(13)?,
                    title: row.get(14)?,
                    duration: u32_column(row, 15)?,
                    description: row.get(16)?,
                    media: media_column(row, 17)?,
                    created_at: timestamp_column(row, 18)?,
                };
                Some((id, u32_column(row, 11)?, task))
            }
            None => None,
        };

        Ok(Self {
            plan,
            week,
            day,
            assignment,
        })
    }
}

/// Folds ordered join rows back into plan aggregates.
fn fold_aggregates(rows: Vec<AggregateRow>) -> Vec<Plan> {
    let mut plans: Vec<Plan> = Vec::new();

    for row in rows {
        if plans.last().is_none_or(|plan| plan.id != row.plan.id) {
            plans.push(row.plan);
        }
        let Some(plan) = plans.last_mut() else {
            continue;
        };

        let Some((week_id, position)) = row.week else {
            continue;
        };
        if plan.weeks.last().is_none_or(|week| week.id != week_id) {
            plan.weeks.push(Week {
                id: week_id,
                plan_id: plan.id.clone(),
                position,
                days: Vec::new(),
            });
        }
        let Some(week) = plan.weeks.last_mut() else {
            continue;
        };

        let Some((day_id, date)) = row.day else {
            continue;
        };
        if week.days.last().is_none_or(|day| day.id != day_id) {
            week.days.push(Day {
                id: day_id,
                week_id: week.id.clone(),
                date,
                tasks: Vec::new(),
            });
        }
        let Some(day) = week.days.last_mut() else {
            continue;
        };

        if let Some((id, position, task)) = row.assignment {
            day.tasks.push(DayTask {
                id,
                day_id: day.id.clone(),
                position,
                task,
            });
        }
    }

    plans
}

impl super::Database {
    /// Generates and persists a plan for `user_id` from a template.
    ///
    /// Validation happens before the transaction opens, so a rejected
    /// deadline writes nothing. The stored plan is read back and returned.
    pub fn create_plan(
        &mut self,
        template_id: &str,
        deadline: &str,
        user_id: &str,
        now: Timestamp,
    ) -> Result<Plan> {
        let template = self
            .get_template(template_id)?
            .ok_or_else(|| CadenceError::not_found("Template", template_id))?;

        let draft = assemble_plan(&template, deadline, user_id, now)?;
        self.insert_plan_draft(&draft)?;
        info!(
            "Created plan {} for user {user_id} with {} tasks",
            draft.plan.id,
            draft.statuses.len()
        );

        self.get_plan_for_user(&draft.plan.id, user_id)?
            .ok_or_else(|| CadenceError::not_found("Plan", draft.plan.id.as_str()))
    }

    /// Writes a generated plan graph and its status rows in one transaction.
    pub fn insert_plan_draft(&mut self, draft: &PlanDraft) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::insert_plan_graph(&tx, &draft.plan)?;

        let mut inserted = 0;
        for status in &draft.statuses {
            inserted += tx
                .execute(
                    UPSERT_STATUS_SQL,
                    params![
                        &status.id,
                        &status.user_id,
                        &status.plan_id,
                        &status.task_id,
                        status.completed
                    ],
                )
                .db_context("Failed to insert task status")?;
        }
        debug!(
            "inserted {inserted} of {} status rows for plan {}",
            draft.statuses.len(),
            draft.plan.id
        );

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    fn insert_plan_graph(tx: &Transaction, plan: &Plan) -> Result<()> {
        tx.execute(
            INSERT_PLAN_SQL,
            params![
                &plan.id,
                &plan.user_id,
                &plan.template_id,
                plan.deadline.to_string(),
                plan.start_date.to_string()
            ],
        )
        .db_context("Failed to insert plan")?;

        for week in &plan.weeks {
            tx.execute(INSERT_WEEK_SQL, params![&week.id, &plan.id, week.position])
                .db_context("Failed to insert week")?;

            for day in &week.days {
                tx.execute(INSERT_DAY_SQL, params![&day.id, &week.id, day.date.to_string()])
                    .db_context("Failed to insert day")?;

                for assignment in &day.tasks {
                    tx.execute(
                        INSERT_DAY_TASK_SQL,
                        params![
                            &assignment.id,
                            &day.id,
                            &assignment.task.id,
                            assignment.position
                        ],
                    )
                    .db_context("Failed to insert day task")?;
                }
            }
        }

        Ok(())
    }

    /// Loads one of the user's plans with its full week/day/task graph.
    ///
    /// A plan owned by someone else is reported as absent.
    pub fn get_plan_for_user(&self, plan_id: &str, user_id: &str) -> Result<Option<Plan>> {
        let plans = self.load_plans(
            &format!("{SELECT_PLAN_AGGREGATE_SQL} WHERE p.id = ?1 AND p.user_id = ?2 {AGGREGATE_ORDER}"),
            params![plan_id, user_id],
        )?;
        Ok(plans.into_iter().next())
    }

    /// Loads every plan of a user with its full graph, in creation order.
    pub fn list_plans_for_user(&self, user_id: &str) -> Result<Vec<Plan>> {
        self.load_plans(
            &format!("{SELECT_PLAN_AGGREGATE_SQL} WHERE p.user_id = ?1 {AGGREGATE_ORDER}"),
            params![user_id],
        )
    }

    fn load_plans(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Plan>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params, AggregateRow::from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        Ok(fold_aggregates(rows))
    }

    /// Permanently deletes one of the user's plans with its whole graph and
    /// status rows.
    pub fn delete_plan(&mut self, plan_id: &str, user_id: &str) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_OWNED_PLAN_SQL, params![plan_id, user_id])
            .db_context("Failed to delete plan")?;
        if deleted == 0 {
            return Err(CadenceError::not_found("Plan", plan_id));
        }
        Ok(())
    }

    /// Permanently deletes any plan regardless of owner.
    pub fn delete_plan_admin(&mut self, plan_id: &str) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![plan_id])
            .db_context("Failed to delete plan")?;
        if deleted == 0 {
            return Err(CadenceError::not_found("Plan", plan_id));
        }
        Ok(())
    }
}
