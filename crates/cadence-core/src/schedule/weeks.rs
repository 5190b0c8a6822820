//! Groups the plan's calendar into 7-day windows.

use jiff::civil::Date;
use log::debug;

use super::{calendar, days::build_days, distribution::solve};
use crate::{
    error::Result,
    models::{Task, Week, new_id},
};

/// Length of a week window.
pub const DAYS_PER_WEEK: usize = 7;

/// Builds the weeks of a plan covering `total_days` days from `start`.
///
/// The distribution is solved once over the whole range and sliced per
/// window. Windows whose days all stay empty are dropped, but the calendar
/// cursor still advances by a full week so dates keep their absolute
/// alignment. `tasks` must already be in canonical order.
pub fn build_weeks(
    plan_id: &str,
    tasks: &[Task],
    start: Date,
    num_weeks: u32,
    total_days: u32,
) -> Result<Vec<Week>> {
    let distribution = solve(total_days as usize, tasks.len())?;
    let mut remaining = tasks.iter();
    let mut weeks = Vec::new();
    let mut cursor = start;

    for position in 0..num_weeks {
        let first = position as usize * DAYS_PER_WEEK;
        if first >= distribution.len() {
            break;
        }
        let last = (first + DAYS_PER_WEEK).min(distribution.len());

        let week_id = new_id();
        let days = build_days(&week_id, &mut remaining, cursor, &distribution[first..last])?;

        if days.is_empty() {
            debug!("week {position} of plan {plan_id} has no tasks, skipping");
        } else {
            weeks.push(Week {
                id: week_id,
                plan_id: plan_id.to_string(),
                position,
                days,
            });
        }

        cursor = calendar::add_days(cursor, DAYS_PER_WEEK)?;
    }

    Ok(weeks)
}
