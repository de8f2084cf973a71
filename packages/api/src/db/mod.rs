//! # Database module — SQLite pool, migrations and queries
//!
//! The pool lives in [`crate::AppState`] rather than in a global so that every
//! test can run against its own in-memory database.
//!
//! - [`connect`] / [`connect_in_memory`] — open a pool from settings or for tests.
//! - [`migrate`] — apply the embedded migrations in `packages/api/migrations`.
//! - [`notes`] / [`users`] — the queries the handlers need, one function each.

mod pool;

pub mod notes;
pub mod users;

pub use pool::{connect, connect_in_memory, migrate};

/// Whether `err` is a `UNIQUE` constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
