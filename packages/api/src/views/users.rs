use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use store::{FormErrors, LoginForm, SignupForm};
use tower_sessions::Session;

use super::found;
use crate::auth::{self, password};
use crate::error::AppResult;
use crate::pages;
use crate::urls::{self, Route};
use crate::{db, AppState};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

pub async fn login_form(Query(query): Query<NextQuery>) -> Html<String> {
    let form = LoginForm {
        next: query.next,
        ..LoginForm::default()
    };
    pages::login(&form, &FormErrors::new())
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(pages::login(&form, &errors).into_response());
    }

    let username = form.username.trim();
    let Some(user) = db::users::find_by_username(&state.pool, username).await? else {
        tracing::warn!(username, "login failed: unknown user");
        return Ok(pages::login(&form, &LoginForm::invalid_credentials()).into_response());
    };
    if !password::verify(form.password.clone(), user.password_hash.clone()).await? {
        tracing::warn!(username, "login failed: wrong password");
        return Ok(pages::login(&form, &LoginForm::invalid_credentials()).into_response());
    }

    auth::login(&session, &user.to_info()).await?;
    tracing::info!(user_id = user.id, "user logged in");

    let target = match form.next.as_deref() {
        Some(next) if urls::is_safe_next(next) => next.to_string(),
        _ => Route::Home.path(),
    };
    Ok(found(target))
}

pub async fn logout(session: Session) -> AppResult<Html<String>> {
    auth::logout(&session).await?;
    Ok(pages::logged_out())
}

pub async fn signup_form() -> Html<String> {
    pages::signup(&SignupForm::default(), &FormErrors::new())
}

pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    let new_user = match form.validate() {
        Ok(new_user) => new_user,
        Err(errors) => return Ok(pages::signup(&form, &errors).into_response()),
    };
    if db::users::username_taken(&state.pool, &new_user.username).await? {
        return Ok(pages::signup(&form, &username_taken()).into_response());
    }

    let hash = password::hash(new_user.password).await?;
    match db::users::create(&state.pool, &new_user.username, &hash).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "user signed up");
            Ok(found(Route::Login.path()))
        }
        Err(err) if db::is_unique_violation(&err) => {
            Ok(pages::signup(&form, &username_taken()).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

fn username_taken() -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add(SignupForm::USERNAME, USERNAME_TAKEN);
    errors
}
