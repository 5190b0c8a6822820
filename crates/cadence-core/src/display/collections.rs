//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{CompletionFilter, PlanProgress, TemplateSummary};

/// Newtype wrapper for displaying collections of template summaries.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{display::TemplateSummaries, models::TemplateSummary};
/// use jiff::Timestamp;
///
/// let summary = TemplateSummary {
///     id: "t-1".to_string(),
///     name: "Couch to 5k".to_string(),
///     prep_time: 3,
///     created_at: Timestamp::now(),
///     task_count: 12,
/// };
///
/// let output = format!("{}", TemplateSummaries(vec![summary]));
/// assert!(output.contains("Couch to 5k"));
/// assert!(output.contains("(12 tasks)"));
/// ```
pub struct TemplateSummaries(pub Vec<TemplateSummary>);

impl TemplateSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, TemplateSummary> {
        self.0.iter()
    }
}

impl Index<usize> for TemplateSummaries {
    type Output = TemplateSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TemplateSummaries {
    type Item = TemplateSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for TemplateSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No templates found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// One page of a user's plans of a single completion class.
pub struct PlanProgressList {
    pub filter: CompletionFilter,
    pub entries: Vec<PlanProgress>,
}

impl PlanProgressList {
    /// Create a list for the given completion class.
    pub fn new(filter: CompletionFilter, entries: Vec<PlanProgress>) -> Self {
        Self { filter, entries }
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of plans on the page.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanProgress> {
        self.entries.iter()
    }
}

impl Index<usize> for PlanProgressList {
    type Output = PlanProgress;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl fmt::Display for PlanProgressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return match self.filter {
                CompletionFilter::Completed => writeln!(f, "No completed plans found."),
                CompletionFilter::Uncompleted => writeln!(f, "No plans in progress."),
            };
        }
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn progress(id: &str, name: &str, completed: u32, total: u32) -> PlanProgress {
        PlanProgress {
            id: id.to_string(),
            name: Some(name.to_string()),
            deadline: Timestamp::from_second(1_767_225_600).unwrap(),
            total_tasks: total,
            completed_tasks: completed,
            upcoming_task: None,
        }
    }

    #[test]
    fn test_plan_progress_list_display() {
        let list = PlanProgressList::new(
            CompletionFilter::Uncompleted,
            vec![progress("p-1", "Marathon", 2, 10), progress("p-2", "Yoga", 0, 4)],
        );
        let output = format!("{list}");

        assert!(output.contains("## Marathon (ID: p-1) (2/10)"));
        assert!(output.contains("## Yoga (ID: p-2) (0/4)"));
        assert!(!output.contains("Up next"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "p-2");
    }

    #[test]
    fn test_empty_lists_name_their_class() {
        let completed = PlanProgressList::new(CompletionFilter::Completed, vec![]);
        assert_eq!(format!("{completed}"), "No completed plans found.\n");

        let uncompleted = PlanProgressList::new(CompletionFilter::Uncompleted, vec![]);
        assert_eq!(format!("{uncompleted}"), "No plans in progress.\n");

        assert_eq!(format!("{}", TemplateSummaries(vec![])), "No templates found.\n");
    }
}
