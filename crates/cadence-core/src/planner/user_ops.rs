//! User operations for the Planner.

use log::info;

use super::{Planner, required_text};
use crate::{
    error::{CadenceError, Result},
    models::User,
    params::{CreateUser, Id},
};

impl Planner {
    /// Registers a user. A duplicate email is rejected as invalid input.
    pub async fn create_user(&self, params: &CreateUser) -> Result<User> {
        let email = required_text("email", &params.email)?;
        let roles = params.roles.clone();

        let user = self
            .with_database(move |db| db.create_user(&email, &roles))
            .await?;
        info!("Registered user {} ({})", user.email, user.id);
        Ok(user)
    }

    /// Looks a user up by id.
    pub async fn find_user_by_id(&self, params: &Id) -> Result<Option<User>> {
        let id = params.id.clone();
        self.with_database(move |db| db.get_user(&id)).await
    }

    /// Looks a user up by email.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_string();
        self.with_database(move |db| db.get_user_by_email(&email))
            .await
    }

    /// Resolves the acting identity from an email.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Unauthorized` when no user owns the email.
    pub async fn authenticate(&self, email: &str) -> Result<User> {
        self.find_user_by_email(email)
            .await?
            .ok_or_else(|| CadenceError::Unauthorized {
                reason: format!("No user registered with email '{email}'"),
            })
    }
}
