//! User queries.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::User;

const COLUMNS: &str = "id, username, password_hash, date_joined";

/// Insert a user whose password is already hashed.
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO users (username, password_hash, date_joined) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(username)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM users WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Identity for a session's user id.
pub async fn find_info(pool: &SqlitePool, id: i64) -> Result<Option<store::User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn username_taken(pool: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
