//! Handler error type.
//!
//! Every handler returns `Result<Response, AppError>`. Missing or foreign notes
//! become a plain 404 page; infrastructure failures are logged and turned into a
//! 500 page that never shows the underlying error to the visitor.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::pages;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("password hashing failed: {0}")]
    Password(String),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, pages::not_found()).into_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, pages::server_error()).into_response()
            }
        }
    }
}
