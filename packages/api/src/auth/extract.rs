//! Request extractors for the visitor's authentication state.
//!
//! - [`MaybeUser`] never rejects: public pages use it to tailor their header.
//! - [`CurrentUser`] is the login gate. An anonymous request is answered with
//!   `302 Found` to the login page, carrying the original path and query in
//!   `next`, before any later extractor (including the form body) runs.

use axum::extract::{FromRef, FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;

use super::session;
use crate::error::AppError;
use crate::{db, urls, views, AppState};

/// The visitor's account, when logged in.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<store::User>);

/// A logged-in visitor.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub store::User);

impl<S> FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let Some(user_id) = session::user_id(&session)
            .await
            .map_err(|e| AppError::from(e).into_response())?
        else {
            return Ok(MaybeUser(None));
        };

        let state = AppState::from_ref(state);
        let user = db::users::find_info(&state.pool, user_id)
            .await
            .map_err(|e| AppError::from(e).into_response())?;
        if user.is_none() {
            tracing::warn!(user_id, "session refers to a missing user");
        }
        Ok(MaybeUser(user))
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match MaybeUser::from_request_parts(parts, state).await? {
            MaybeUser(Some(user)) => Ok(CurrentUser(user)),
            MaybeUser(None) => {
                let uri = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map(|original| &original.0)
                    .unwrap_or(&parts.uri);
                let next = uri
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or(urls::HOME);
                Err(views::found(urls::login_with_next(next)))
            }
        }
    }
}
