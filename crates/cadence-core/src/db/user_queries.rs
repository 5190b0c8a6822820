//! User and role queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use super::timestamp_column;
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{Role, User, new_id},
};

const CHECK_EMAIL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)";
const INSERT_USER_SQL: &str = "INSERT INTO users (id, email, created_at) VALUES (?1, ?2, ?3)";
const INSERT_ROLE_SQL: &str = "INSERT OR IGNORE INTO user_roles (user_id, role) VALUES (?1, ?2)";
const SELECT_USER_BY_ID_SQL: &str = "SELECT id, email, created_at FROM users WHERE id = ?1";
const SELECT_USER_BY_EMAIL_SQL: &str = "SELECT id, email, created_at FROM users WHERE email = ?1";
const SELECT_ROLES_SQL: &str = "SELECT role FROM user_roles WHERE user_id = ?1 ORDER BY role";

impl super::Database {
    fn build_user_from_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            email: row.get(1)?,
            roles: Vec::new(),
            created_at: timestamp_column(row, 2)?,
        })
    }

    /// Registers a user with the given roles.
    ///
    /// A user without any role is given [`Role::User`].
    pub fn create_user(&mut self, email: &str, roles: &[Role]) -> Result<User> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CadenceError::invalid_input("email")
                .with_reason(format!("'{email}' is not a valid email address")));
        }

        let mut roles = roles.to_vec();
        if roles.is_empty() {
            roles.push(Role::User);
        }
        roles.sort_by_key(|role| role.as_str());
        roles.dedup();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_EMAIL_EXISTS_SQL, params![email], |row| row.get(0))
            .db_context("Failed to check email uniqueness")?;
        if exists {
            return Err(CadenceError::invalid_input("email")
                .with_reason(format!("A user with email '{email}' already exists")));
        }

        let id = new_id();
        let now = Timestamp::now();
        tx.execute(INSERT_USER_SQL, params![&id, email, now.to_string()])
            .db_context("Failed to insert user")?;
        for role in &roles {
            tx.execute(INSERT_ROLE_SQL, params![&id, role.as_str()])
                .db_context("Failed to insert user role")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(User {
            id,
            email: email.to_string(),
            roles,
            created_at: now,
        })
    }

    /// Retrieves a user by id.
    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.find_user(SELECT_USER_BY_ID_SQL, id)
    }

    /// Retrieves a user by email.
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_user(SELECT_USER_BY_EMAIL_SQL, email.trim())
    }

    fn find_user(&self, sql: &str, key: &str) -> Result<Option<User>> {
        let user = self
            .connection
            .query_row(sql, params![key], Self::build_user_from_row)
            .optional()
            .db_context("Failed to query user")?;

        match user {
            Some(mut user) => {
                user.roles = self.get_roles(&user.id)?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    fn get_roles(&self, user_id: &str) -> Result<Vec<Role>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROLES_SQL)
            .db_context("Failed to prepare query")?;

        let raw: Vec<String> = stmt
            .query_map(params![user_id], |row| row.get(0))
            .db_context("Failed to query roles")?
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to fetch roles")?;

        raw.iter()
            .map(|role| {
                role.parse::<Role>().map_err(|reason| CadenceError::Configuration {
                    message: format!("Corrupt role for user {user_id}: {reason}"),
                })
            })
            .collect()
    }
}
