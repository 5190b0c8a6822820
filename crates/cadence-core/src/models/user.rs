//! User model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Role;

/// A registered user as seen by the planning core.
///
/// Credentials live outside this crate; only the identity and role
/// membership needed for ownership checks and template listing are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: String,

    /// Unique email address
    pub email: String,

    /// Roles granted to the user
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Timestamp when the user was registered (UTC)
    pub created_at: Timestamp,
}

impl User {
    /// Returns true when the user holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
