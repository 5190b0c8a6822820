//! Materializes the days of one week from a slice of the distribution.

use jiff::civil::Date;

use super::calendar;
use crate::{
    error::Result,
    models::{Day, DayTask, Task, new_id},
};

/// Builds the days covered by `per_day_counts`, starting at `start`.
///
/// Day `i` is dated `start + i` and takes the next `per_day_counts[i]` tasks
/// from `tasks`. Days that end up without a task are not materialized. When
/// `tasks` runs dry the remaining days are silently left empty.
pub fn build_days<'a, I>(
    week_id: &str,
    tasks: &mut I,
    start: Date,
    per_day_counts: &[u32],
) -> Result<Vec<Day>>
where
    I: Iterator<Item = &'a Task>,
{
    let mut days = Vec::new();

    for (offset, &count) in per_day_counts.iter().enumerate() {
        let day_id = new_id();
        let assignments: Vec<DayTask> = tasks
            .by_ref()
            .take(count as usize)
            .enumerate()
            .map(|(position, task)| DayTask {
                id: new_id(),
                day_id: day_id.clone(),
                position: position as u32,
                task: task.clone(),
            })
            .collect();

        if assignments.is_empty() {
            continue;
        }

        days.push(Day {
            id: day_id,
            week_id: week_id.to_string(),
            date: calendar::add_days(start, offset)?,
            tasks: assignments,
        });
    }

    Ok(days)
}
