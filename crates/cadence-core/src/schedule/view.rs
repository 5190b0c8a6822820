//! Read-side composition of plan views.
//!
//! Everything here is a pure function of the loaded aggregate, the owner's
//! completion rows and the current time. Nothing is written back.

use std::collections::HashMap;

use jiff::Timestamp;

use super::calendar;
use crate::models::{
    CompletionFilter, DayView, Page, Plan, PlanProgress, PlanTask, PlanView, ScheduledTask,
    TaskView, UserTaskStatus, WeekView,
};

/// Builds the read view of `plan` for its owner.
///
/// Completion flags come from the owner's rows in `statuses` and default to
/// false. Empty days and weeks are dropped, weeks are ordered by their first
/// day and the flattened schedule is sorted by date.
pub fn compose_plan_view(plan: &Plan, statuses: &[UserTaskStatus], now: Timestamp) -> PlanView {
    let completion: HashMap<&str, bool> = statuses
        .iter()
        .filter(|s| s.plan_id == plan.id && s.user_id == plan.user_id)
        .map(|s| (s.task_id.as_str(), s.completed))
        .collect();
    let is_completed = |task_id: &str| completion.get(task_id).copied().unwrap_or(false);

    let mut weeks: Vec<WeekView> = plan
        .weeks
        .iter()
        .filter_map(|week| {
            let mut days: Vec<DayView> = week
                .days
                .iter()
                .filter(|day| !day.tasks.is_empty())
                .map(|day| {
                    let mut assignments: Vec<_> = day.tasks.iter().collect();
                    assignments.sort_by_key(|assignment| assignment.position);
                    DayView {
                        id: day.id.clone(),
                        date: day.date,
                        tasks: assignments
                            .into_iter()
                            .map(|assignment| TaskView {
                                task: assignment.task.clone(),
                                completed: is_completed(&assignment.task.id),
                            })
                            .collect(),
                    }
                })
                .collect();
            if days.is_empty() {
                return None;
            }
            days.sort_by_key(|day| day.date);
            Some(WeekView {
                id: week.id.clone(),
                position: week.position,
                days,
            })
        })
        .collect();
    weeks.sort_by_key(|week| week.days.first().map(|day| day.date));

    let mut schedule: Vec<ScheduledTask> = weeks
        .iter()
        .flat_map(|week| &week.days)
        .flat_map(|day| {
            day.tasks.iter().map(|task| ScheduledTask {
                day_id: day.id.clone(),
                date: day.date,
                task: task.clone(),
            })
        })
        .collect();
    schedule.sort_by_key(|entry| entry.date);

    let total_tasks = schedule.len() as u32;
    let completed_tasks = schedule.iter().filter(|entry| entry.task.completed).count() as u32;

    let today = calendar::utc_date(now);
    let upcoming_task = schedule
        .iter()
        .find(|entry| !entry.task.completed && entry.date >= today)
        .cloned();

    PlanView {
        plan_id: plan.id.clone(),
        title: plan.template_name.clone(),
        start_date: plan.start_date,
        deadline: plan.deadline,
        days_left: calendar::days_until(plan.deadline, now),
        total_days: calendar::whole_days_between(plan.deadline, plan.start_date) + 1,
        total_tasks,
        completed_tasks,
        upcoming_task,
        weeks,
        schedule,
    }
}

/// Classifies composed views and pages through them by ascending deadline.
pub fn list_progress(
    mut views: Vec<PlanView>,
    filter: CompletionFilter,
    page: Page,
) -> Vec<PlanProgress> {
    views.sort_by_key(|view| view.deadline);
    let matching = views
        .into_iter()
        .filter(|view| filter.matches(view.total_tasks, view.completed_tasks))
        .map(PlanProgress::from)
        .collect();
    page.apply(matching)
}

/// Finds where `task_id` is scheduled in a composed view.
///
/// `week_order` counts the view's remaining weeks starting at 1.
pub fn locate_task(view: &PlanView, task_id: &str) -> Option<PlanTask> {
    view.weeks.iter().enumerate().find_map(|(index, week)| {
        week.days.iter().find_map(|day| {
            day.tasks
                .iter()
                .find(|task| task.task.id == task_id)
                .map(|task| PlanTask {
                    plan_id: view.plan_id.clone(),
                    task: task.clone(),
                    week_order: index as u32 + 1,
                    date: day.date,
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::{Task, Template},
        schedule::assemble_plan,
    };

    fn now() -> Timestamp {
        "2025-01-01T10:00:00Z".parse().unwrap()
    }

    fn template(task_count: usize) -> Template {
        Template {
            id: "template".to_string(),
            name: "Couch to 5k".to_string(),
            prep_time: 0,
            ideal_pre_req: None,
            duration: None,
            created_at: Timestamp::from_second(1_600_000_000).unwrap(),
            tasks: (0..task_count)
                .map(|i| Task {
                    id: format!("task-{i}"),
                    template_id: "template".to_string(),
                    title: format!("Run {i}"),
                    duration: 30,
                    description: None,
                    media: vec![],
                    created_at: Timestamp::from_second(1_700_000_000 + i as i64).unwrap(),
                })
                .collect(),
        }
    }

    fn plan_with(task_count: usize, deadline: &str) -> (Plan, Vec<UserTaskStatus>) {
        let draft = assemble_plan(&template(task_count), deadline, "user", now()).unwrap();
        (draft.plan, draft.statuses)
    }

    fn complete(statuses: &mut [UserTaskStatus], task_id: &str) {
        for status in statuses.iter_mut().filter(|s| s.task_id == task_id) {
            status.completed = true;
        }
    }

    #[test]
    fn test_fresh_plan_view() {
        let (plan, statuses) = plan_with(10, "2025-01-15T10:00:00Z");
        let view = compose_plan_view(&plan, &statuses, now());

        assert_eq!(view.title.as_deref(), Some("Couch to 5k"));
        assert_eq!(view.total_tasks, 10);
        assert_eq!(view.completed_tasks, 0);
        assert_eq!(view.total_days, 15);
        assert_eq!(view.days_left, 14);
        assert_eq!(view.weeks.len(), 3);
        assert!(!view.is_completed());

        let upcoming = view.upcoming_task.unwrap();
        assert_eq!(upcoming.task.task.id, "task-0");
        assert_eq!(upcoming.date, date(2025, 1, 1));
    }

    #[test]
    fn test_schedule_is_sorted_by_date() {
        let (plan, statuses) = plan_with(20, "2025-01-09T10:00:00Z");
        let view = compose_plan_view(&plan, &statuses, now());

        assert_eq!(view.schedule.len(), 20);
        assert!(view.schedule.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(view.schedule[0].task.task.id, "task-0");
        assert_eq!(view.schedule[19].task.task.id, "task-19");
    }

    #[test]
    fn test_composition_is_idempotent() {
        let (plan, statuses) = plan_with(6, "2025-01-20T00:00:00Z");
        let first = compose_plan_view(&plan, &statuses, now());
        let second = compose_plan_view(&plan, &statuses, now());

        assert_eq!(first, second);
    }

    #[test]
    fn test_completion_advances_upcoming() {
        let (plan, mut statuses) = plan_with(3, "2025-01-10T10:00:00Z");
        let before = compose_plan_view(&plan, &statuses, now());

        complete(&mut statuses, "task-0");
        let after = compose_plan_view(&plan, &statuses, now());

        assert_eq!(after.completed_tasks, before.completed_tasks + 1);
        assert_eq!(before.upcoming_task.unwrap().task.task.id, "task-0");
        assert_eq!(after.upcoming_task.unwrap().task.task.id, "task-1");
    }

    #[test]
    fn test_all_completed_has_no_upcoming() {
        let (plan, mut statuses) = plan_with(2, "2025-01-05T10:00:00Z");
        complete(&mut statuses, "task-0");
        complete(&mut statuses, "task-1");
        let view = compose_plan_view(&plan, &statuses, now());

        assert!(view.is_completed());
        assert!(view.upcoming_task.is_none());
    }

    #[test]
    fn test_past_days_are_not_upcoming() {
        let (plan, statuses) = plan_with(3, "2025-01-10T10:00:00Z");
        let later: Timestamp = "2025-01-06T08:00:00Z".parse().unwrap();
        let view = compose_plan_view(&plan, &statuses, later);

        let upcoming = view.upcoming_task.unwrap();
        assert!(upcoming.date >= date(2025, 1, 6));
        assert_eq!(view.days_left, 5);
    }

    #[test]
    fn test_missing_status_defaults_to_incomplete() {
        let (plan, _) = plan_with(2, "2025-01-05T10:00:00Z");
        let view = compose_plan_view(&plan, &[], now());

        assert_eq!(view.total_tasks, 2);
        assert!(view.schedule.iter().all(|entry| !entry.task.completed));
    }

    #[test]
    fn test_foreign_statuses_are_ignored() {
        let (plan, mut statuses) = plan_with(1, "2025-01-05T10:00:00Z");
        for status in &mut statuses {
            status.user_id = "someone-else".to_string();
            status.completed = true;
        }
        let view = compose_plan_view(&plan, &statuses, now());

        assert_eq!(view.completed_tasks, 0);
    }

    #[test]
    fn test_emptied_day_and_week_are_dropped() {
        // Two tasks over fifteen days: one in the first week, one in the third.
        let (mut plan, statuses) = plan_with(2, "2025-01-15T10:00:00Z");
        assert_eq!(plan.weeks.len(), 2);
        plan.weeks[1].days[0].tasks.clear();

        let view = compose_plan_view(&plan, &statuses, now());

        assert_eq!(view.weeks.len(), 1);
        assert_eq!(view.total_tasks, 1);
        assert_eq!(view.schedule.len(), 1);
    }

    #[test]
    fn test_plan_with_no_tasks_is_uncompleted() {
        let (plan, statuses) = plan_with(0, "2025-01-05T10:00:00Z");
        let view = compose_plan_view(&plan, &statuses, now());

        assert_eq!(view.total_tasks, 0);
        assert!(!view.is_completed());
        assert!(view.upcoming_task.is_none());
    }

    #[test]
    fn test_list_progress_classifies_and_pages() {
        let views: Vec<PlanView> = ["2025-03-01", "2025-02-01", "2025-04-01"]
            .iter()
            .map(|deadline| {
                let (plan, statuses) = plan_with(1, deadline);
                compose_plan_view(&plan, &statuses, now())
            })
            .collect();

        let uncompleted = list_progress(views.clone(), CompletionFilter::Uncompleted, Page::PLANS);
        let deadlines: Vec<String> = uncompleted
            .iter()
            .map(|p| calendar::utc_date(p.deadline).to_string())
            .collect();
        assert_eq!(deadlines, vec!["2025-02-01", "2025-03-01", "2025-04-01"]);

        let paged = list_progress(
            views.clone(),
            CompletionFilter::Uncompleted,
            Page {
                offset: 1,
                limit: 1,
            },
        );
        assert_eq!(paged.len(), 1);
        assert_eq!(calendar::utc_date(paged[0].deadline), date(2025, 3, 1));

        assert!(list_progress(views, CompletionFilter::Completed, Page::PLANS).is_empty());
    }

    #[test]
    fn test_locate_task_reports_week_order() {
        let (plan, statuses) = plan_with(2, "2025-01-15T10:00:00Z");
        let view = compose_plan_view(&plan, &statuses, now());

        let located = locate_task(&view, "task-1").unwrap();
        assert_eq!(located.week_order, 2);
        assert_eq!(located.date, date(2025, 1, 15));
        assert!(!located.task.completed);

        assert!(locate_task(&view, "missing").is_none());
    }
}
