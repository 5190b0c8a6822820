//! Even spreading of tasks over the days of a plan.
//!
//! [`solve`] returns one entry per day holding the number of tasks scheduled
//! on that day. When there are at least as many days as tasks every entry is
//! 0 or 1 and the marks are placed at the widest stride that still fits; with
//! more tasks than days the tasks are dealt out round robin.

use log::debug;

use crate::error::{CadenceError, Result};

/// Computes the per-day task counts for `total_slots` days and `item_count`
/// tasks.
///
/// The returned vector has `total_slots` entries summing to `item_count`.
///
/// # Errors
///
/// Returns `CadenceError::InvalidInput` when `total_slots` is zero.
///
/// # Examples
///
/// ```rust
/// use cadence_core::schedule::solve;
///
/// assert_eq!(solve(7, 2).unwrap(), vec![1, 0, 0, 0, 0, 0, 1]);
/// assert_eq!(solve(3, 7).unwrap(), vec![3, 2, 2]);
/// ```
pub fn solve(total_slots: usize, item_count: usize) -> Result<Vec<u32>> {
    if total_slots == 0 {
        return Err(CadenceError::invalid_input("total_slots")
            .with_reason("A distribution needs at least one day"));
    }

    let distribution = if item_count > total_slots {
        round_robin(total_slots, item_count)
    } else {
        spread(total_slots, item_count)
    };

    debug!("distributed {item_count} tasks over {total_slots} days: {distribution:?}");
    Ok(distribution)
}

/// Largest stride `gap` with `gap * (item_count - 1) < total_slots`.
fn widest_gap(total_slots: usize, item_count: usize) -> usize {
    let intervals = item_count.saturating_sub(1);
    let (mut low, mut high) = (0, total_slots);
    let mut gap = 0;

    while low <= high {
        let mid = (low + high) / 2;
        if mid * intervals < total_slots {
            gap = mid;
            low = mid + 1;
        } else {
            let Some(lower) = mid.checked_sub(1) else {
                break;
            };
            high = lower;
        }
    }

    gap
}

fn spread(total_slots: usize, item_count: usize) -> Vec<u32> {
    let mut distribution = vec![0; total_slots];
    let mut gap = widest_gap(total_slots, item_count);

    // A stride of one would pile every task at the front; alternate days
    // instead and fall back to consecutive days only once the tail gets tight.
    let crowded = gap == 1 && item_count > total_slots / 2;
    if crowded {
        gap = 2;
    }

    let mut remaining = item_count;
    let mut idx = 0;
    while idx < total_slots && remaining > 0 {
        distribution[idx] = 1;
        remaining -= 1;
        if crowded && total_slots < idx + 2 + remaining {
            gap = 1;
        }
        idx += gap;
    }

    distribution
}

fn round_robin(total_slots: usize, item_count: usize) -> Vec<u32> {
    let mut distribution = vec![0; total_slots];
    for item in 0..item_count {
        distribution[item % total_slots] += 1;
    }
    distribution
}
