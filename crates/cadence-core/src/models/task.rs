//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// ID of the owning template
    pub template_id: String,

    /// Brief title of the task
    pub title: String,

    /// Expected duration of the task in minutes
    pub duration: u32,

    /// Detailed multi-line description of the task
    pub description: Option<String>,

    /// Ordered media references (video URLs, file names)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<String>,

    /// Timestamp when the task was created (UTC); the canonical ordering key
    pub created_at: Timestamp,
}
