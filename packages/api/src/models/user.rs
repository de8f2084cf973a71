//! # User model for local accounts
//!
//! [`User`] is the complete row of the `users` table, password hash included. It
//! never leaves the server side of a handler: [`User::to_info`] projects it into
//! the [`store::User`] identity that handlers and pages work with.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Identity without credentials.
    pub fn to_info(&self) -> store::User {
        store::User {
            id: self.id,
            username: self.username.clone(),
        }
    }
}
