use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use sqlx::SqlitePool;
use store::forms::duplicate_slug_message;
use store::{FormErrors, Note, NoteDraft, NoteForm, User};

use super::{found, NoteSlug};
use crate::auth::{CurrentUser, MaybeUser};
use crate::error::{AppError, AppResult};
use crate::pages::{self, NoteFormKind};
use crate::urls::Route;
use crate::{db, AppState};

pub async fn home(MaybeUser(user): MaybeUser) -> Html<String> {
    pages::home(user.as_ref())
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let notes = db::notes::list_by_author(&state.pool, user.id).await?;
    Ok(pages::note_list(&user, &notes))
}

pub async fn success(CurrentUser(user): CurrentUser) -> Html<String> {
    pages::success(&user)
}

pub async fn add_form(CurrentUser(user): CurrentUser) -> Html<String> {
    pages::note_form(&user, NoteFormKind::Add, &NoteForm::default(), &FormErrors::new())
}

pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<NoteForm>,
) -> AppResult<Response> {
    let draft = match clean(&state.pool, &form, None).await? {
        Ok(draft) => draft,
        Err(errors) => return Ok(pages::note_form(&user, NoteFormKind::Add, &form, &errors).into_response()),
    };

    match db::notes::insert(&state.pool, user.id, &draft).await {
        Ok(note) => {
            tracing::info!(note_id = note.id, slug = %note.slug, author_id = user.id, "note created");
            Ok(found(Route::Success.path()))
        }
        Err(err) if db::is_unique_violation(&err) => {
            let errors = slug_taken_errors(&draft.slug);
            Ok(pages::note_form(&user, NoteFormKind::Add, &form, &errors).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn detail(
    State(state): State<AppState>,
    NoteSlug(slug): NoteSlug,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let note = owned_note(&state.pool, &slug, &user).await?;
    Ok(pages::note_detail(&user, &note))
}

pub async fn edit_form(
    State(state): State<AppState>,
    NoteSlug(slug): NoteSlug,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let note = owned_note(&state.pool, &slug, &user).await?;
    Ok(pages::note_form(
        &user,
        NoteFormKind::Edit(&note.slug),
        &NoteForm::from_note(&note),
        &FormErrors::new(),
    ))
}

pub async fn edit(
    State(state): State<AppState>,
    NoteSlug(slug): NoteSlug,
    CurrentUser(user): CurrentUser,
    form: Result<Form<NoteForm>, FormRejection>,
) -> AppResult<Response> {
    let note = owned_note(&state.pool, &slug, &user).await?;
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return Ok(rejection.into_response()),
    };
    let kind = NoteFormKind::Edit(&note.slug);

    let draft = match clean(&state.pool, &form, Some(note.id)).await? {
        Ok(draft) => draft,
        Err(errors) => return Ok(pages::note_form(&user, kind, &form, &errors).into_response()),
    };

    match db::notes::update(&state.pool, note.id, &draft).await {
        Ok(updated) => {
            tracing::info!(note_id = updated.id, slug = %updated.slug, "note updated");
            Ok(found(Route::Success.path()))
        }
        Err(err) if db::is_unique_violation(&err) => {
            let errors = slug_taken_errors(&draft.slug);
            Ok(pages::note_form(&user, kind, &form, &errors).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_form(
    State(state): State<AppState>,
    NoteSlug(slug): NoteSlug,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let note = owned_note(&state.pool, &slug, &user).await?;
    Ok(pages::note_delete(&user, &note))
}

pub async fn delete(
    State(state): State<AppState>,
    NoteSlug(slug): NoteSlug,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    let note = owned_note(&state.pool, &slug, &user).await?;
    if !db::notes::delete(&state.pool, note.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(note_id = note.id, slug = %note.slug, "note deleted");
    Ok(found(Route::Success.path()))
}

/// Any other method on a note page. Only the author learns that the note exists.
pub async fn note_method_not_allowed(
    State(state): State<AppState>,
    NoteSlug(slug): NoteSlug,
    CurrentUser(user): CurrentUser,
) -> AppResult<StatusCode> {
    owned_note(&state.pool, &slug, &user).await?;
    Ok(StatusCode::METHOD_NOT_ALLOWED)
}

/// Any other method on the remaining login-only pages.
pub async fn method_not_allowed(CurrentUser(_): CurrentUser) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// The note stored under `slug`, if `user` wrote it.
async fn owned_note(pool: &SqlitePool, slug: &str, user: &User) -> AppResult<Note> {
    db::notes::find_owned(pool, slug, user.id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Validate `form` and check its slug against every note but `except`.
async fn clean(
    pool: &SqlitePool,
    form: &NoteForm,
    except: Option<i64>,
) -> AppResult<Result<NoteDraft, FormErrors>> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => return Ok(Err(errors)),
    };
    if db::notes::slug_taken(pool, &draft.slug, except).await? {
        return Ok(Err(slug_taken_errors(&draft.slug)));
    }
    Ok(Ok(draft))
}

fn slug_taken_errors(slug: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add(NoteForm::SLUG, duplicate_slug_message(slug));
    errors
}
