//! # Request handlers
//!
//! | Module    | Routes                                             |
//! |-----------|----------------------------------------------------|
//! | [`notes`] | home, list, add, detail, edit, delete, success     |
//! | [`users`] | login, logout, signup                              |
//!
//! Extractor order matters: [`NoteSlug`] runs before the login gate so a
//! malformed slug is a 404 for everyone, and the login gate runs before any
//! form body is read.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

pub mod notes;
pub mod users;

/// `302 Found` to `location`.
pub(crate) fn found(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.into())]).into_response()
}

/// Fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// The `{slug}` path segment, when it is a well-formed slug.
#[derive(Debug, Clone)]
pub struct NoteSlug(pub String);

impl<S> FromRequestParts<S> for NoteSlug
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        if store::is_valid_slug(&slug) {
            Ok(NoteSlug(slug))
        } else {
            Err(AppError::NotFound)
        }
    }
}
