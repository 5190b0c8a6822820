//! Template summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Template;

/// Summary information about a template with its task count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateSummary {
    /// Template ID
    pub id: String,
    /// Name of the template
    pub name: String,
    /// Lead time in days
    pub prep_time: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of tasks in the template
    pub task_count: u32,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            prep_time: template.prep_time,
            created_at: template.created_at,
            task_count: template.tasks.len() as u32,
        }
    }
}
