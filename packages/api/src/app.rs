use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::settings::Settings;
use crate::urls;
use crate::views::{self, notes, users};

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: SqlitePool, settings: Settings) -> Self {
        Self {
            pool,
            settings: Arc::new(settings),
        }
    }
}

/// The whole site: every named route, the 404 fallback, sessions and request tracing.
pub fn router<S>(state: AppState, session_store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session = &state.settings.session;
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(session.cookie_name.clone())
        .with_secure(session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(session.inactivity_days)));

    Router::new()
        .route(urls::HOME, get(notes::home))
        .route(urls::LIST, get(notes::list).fallback(notes::method_not_allowed))
        .route(
            urls::ADD,
            get(notes::add_form)
                .post(notes::add)
                .fallback(notes::method_not_allowed),
        )
        .route(
            urls::DETAIL,
            get(notes::detail).fallback(notes::note_method_not_allowed),
        )
        .route(
            urls::EDIT,
            get(notes::edit_form)
                .post(notes::edit)
                .fallback(notes::note_method_not_allowed),
        )
        .route(
            urls::DELETE,
            get(notes::delete_form)
                .post(notes::delete)
                .delete(notes::delete)
                .fallback(notes::note_method_not_allowed),
        )
        .route(urls::SUCCESS, get(notes::success).fallback(notes::method_not_allowed))
        .route(urls::LOGIN, get(users::login_form).post(users::login))
        .route(urls::LOGOUT, post(users::logout))
        .route(urls::SIGNUP, get(users::signup_form).post(users::signup))
        .fallback(views::not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
