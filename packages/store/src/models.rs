//! # Domain models for notes and their authors
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A persisted note. `slug` is unique across every note and is the public identifier used in URLs; `author_id` never changes after creation. |
//! | [`NoteDraft`] | Validated title, text and slug ready to be inserted or applied to an existing note. Only [`crate::NoteForm`] produces one. |
//! | [`User`] | The identity of an account as seen by handlers: id and username, never the password hash. |
//! | [`NewUser`] | A validated signup: username plus the plaintext password still to be hashed. |
//!
//! With the `sqlx` feature the row types derive `sqlx::FromRow`, so the `api`
//! crate can load them straight out of queries.

use serde::{Deserialize, Serialize};

/// A note owned by exactly one user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
}

/// Cleaned note fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
    pub slug: String,
}

/// Account identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// A signup that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
