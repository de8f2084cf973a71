//! Note queries. Everything a handler reads is scoped to the requesting author.

use sqlx::SqlitePool;
use store::{Note, NoteDraft};

const COLUMNS: &str = "id, title, text, slug, author_id";

/// The author's notes in creation order.
pub async fn list_by_author(pool: &SqlitePool, author_id: i64) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM notes WHERE author_id = ? ORDER BY id"
    ))
    .bind(author_id)
    .fetch_all(pool)
    .await
}

/// The note with `slug`, but only if `author_id` wrote it.
pub async fn find_owned(
    pool: &SqlitePool,
    slug: &str,
    author_id: i64,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM notes WHERE slug = ? AND author_id = ?"
    ))
    .bind(slug)
    .bind(author_id)
    .fetch_optional(pool)
    .await
}

/// Whether another note already uses `slug`. `except` is the note being edited.
pub async fn slug_taken(
    pool: &SqlitePool,
    slug: &str,
    except: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM notes WHERE slug = ? AND (? IS NULL OR id <> ?)")
            .bind(slug)
            .bind(except)
            .bind(except)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

pub async fn insert(
    pool: &SqlitePool,
    author_id: i64,
    draft: &NoteDraft,
) -> Result<Note, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO notes (title, text, slug, author_id) VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(&draft.title)
    .bind(&draft.text)
    .bind(&draft.slug)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Apply `draft` to the note `id`. The author never changes.
pub async fn update(pool: &SqlitePool, id: i64, draft: &NoteDraft) -> Result<Note, sqlx::Error> {
    sqlx::query_as(&format!(
        "UPDATE notes SET title = ?, text = ?, slug = ? WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(&draft.title)
    .bind(&draft.text)
    .bind(&draft.slug)
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Number of notes across every author.
pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
