//! Roles and completion records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of user roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Authors templates and may remove any plan
    Admin,

    /// Regular member who instantiates plans
    User,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

/// Per-user, per-plan, per-task completion record.
///
/// Exactly one row exists for every task of the source template at the time
/// the plan was created. This is the only mutable progress state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserTaskStatus {
    pub id: String,
    pub user_id: String,
    pub plan_id: String,
    pub task_id: String,
    #[serde(default)]
    pub completed: bool,
}

impl UserTaskStatus {
    /// A fresh, not yet completed status row.
    pub fn pending(user_id: &str, plan_id: &str, task_id: &str) -> Self {
        Self {
            id: super::new_id(),
            user_id: user_id.to_string(),
            plan_id: plan_id.to_string(),
            task_id: task_id.to_string(),
            completed: false,
        }
    }
}
