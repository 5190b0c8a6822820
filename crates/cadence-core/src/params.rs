//! Parameter structures for cadence operations.
//!
//! These structures are shared by every front end. They carry raw input and
//! no framework derives beyond serde; the CLI wraps them in clap argument
//! types and converts with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (validation)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Numeric fields that users type are signed so that a negative value reaches
//! the planner and is rejected there as invalid input, instead of failing
//! inside an argument parser with a front-end specific message.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for registering a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    /// Unique email address
    pub email: String,
    /// Roles to grant; empty means `USER`
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Parameters for creating a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTemplate {
    /// Display name (required)
    pub name: String,
    /// Minimum lead time in days
    #[serde(default)]
    pub prep_time: i64,
    /// Freeform description of the ideal prerequisites
    pub ideal_pre_req: Option<String>,
    /// Nominal duration of the programme
    pub duration: Option<i64>,
}

/// Parameters for updating a template. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplate {
    pub id: String,
    pub name: Option<String>,
    pub prep_time: Option<i64>,
    pub ideal_pre_req: Option<String>,
    pub duration: Option<i64>,
}

/// Parameters for listing templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplates {
    /// Entries to skip (default 0)
    pub offset: Option<usize>,
    /// Maximum entries to return (default 9)
    pub limit: Option<usize>,
}

/// Parameters for adding a task to a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    pub template_id: String,
    /// Brief title (required)
    pub title: String,
    /// Expected duration
    #[serde(default)]
    pub duration: i64,
    pub description: Option<String>,
    /// Ordered media references
    #[serde(default)]
    pub media: Vec<String>,
}

/// Parameters for updating a task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    pub id: String,
    pub title: Option<String>,
    pub duration: Option<i64>,
    pub description: Option<String>,
    /// Replaces the whole media list when given
    pub media: Option<Vec<String>>,
}

/// Parameters for generating a plan from a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    pub template_id: String,
    /// RFC 3339 timestamp, civil datetime or date, all read as UTC
    pub deadline: String,
}

/// Identifies a task inside one of the caller's plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanTaskRef {
    pub plan_id: String,
    pub task_id: String,
}

/// Parameters for listing the caller's plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// List completed plans instead of uncompleted ones
    #[serde(default)]
    pub completed: bool,
    /// Entries to skip (default 0)
    pub offset: Option<usize>,
    /// Maximum entries to return (default 5)
    pub limit: Option<usize>,
}
