use axum::response::Html;
use dioxus::prelude::*;
use store::{FormErrors, Note, NoteForm, User};

use super::{document, field_errors};
use crate::urls::Route;

/// Which note form is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFormKind<'a> {
    Add,
    /// Editing the note currently stored under this slug.
    Edit(&'a str),
}

pub fn home(user: Option<&User>) -> Html<String> {
    let body = match user {
        Some(user) => {
            let username = &user.username;
            let list = Route::List.path();
            rsx! {
                h1 { "Welcome back, {username}!" }
                p { "Your notes are waiting for you on the " a { href: "{list}", "notes page" } "." }
            }
        }
        None => {
            let signup = Route::Signup.path();
            rsx! {
                h1 { "Personal notes" }
                p { "Keep your notes in one place. " a { href: "{signup}", "Sign up" } " to get started." }
            }
        }
    };
    document("Home", user, body)
}

/// The author's notes, oldest first.
pub fn note_list(user: &User, notes: &[Note]) -> Html<String> {
    let rows: Vec<(i64, String, String)> = notes
        .iter()
        .map(|note| (note.id, note.title.clone(), Route::Detail(&note.slug).path()))
        .collect();
    let add = Route::Add.path();

    document(
        "Notes",
        Some(user),
        rsx! {
            h1 { "Your notes" }
            if rows.is_empty() {
                p { "You have no notes yet. " a { href: "{add}", "Write the first one" } "." }
            }
            ol { class: "note-list",
                for (id, title, url) in rows.iter() {
                    li { id: "note-{id}",
                        a { href: "{url}", "{title}" }
                    }
                }
            }
        },
    )
}

pub fn note_form(
    user: &User,
    kind: NoteFormKind<'_>,
    form: &NoteForm,
    errors: &FormErrors,
) -> Html<String> {
    let (heading, action) = match kind {
        NoteFormKind::Add => ("Add a note", Route::Add.path()),
        NoteFormKind::Edit(slug) => ("Edit the note", Route::Edit(slug).path()),
    };
    let title = &form.title;
    let text = &form.text;
    let slug = &form.slug;

    document(
        heading,
        Some(user),
        rsx! {
            h1 { "{heading}" }
            form { id: "note-form", method: "post", action: "{action}",
                {field_errors(errors.non_field())}
                label { r#for: "id_title", "Title" }
                input { id: "id_title", r#type: "text", name: "title", maxlength: "100", value: "{title}" }
                {field_errors(errors.field(NoteForm::TITLE))}
                label { r#for: "id_text", "Text" }
                textarea { id: "id_text", name: "text", rows: "10", "{text}" }
                {field_errors(errors.field(NoteForm::TEXT))}
                label { r#for: "id_slug", "Address for the note page" }
                input { id: "id_slug", r#type: "text", name: "slug", maxlength: "100", value: "{slug}" }
                p { class: "help", "Letters, digits, hyphens and underscores only. Leave empty to build it from the title." }
                {field_errors(errors.field(NoteForm::SLUG))}
                button { r#type: "submit", "Save" }
            }
        },
    )
}

pub fn note_detail(user: &User, note: &Note) -> Html<String> {
    let title = &note.title;
    let text = &note.text;
    let slug = &note.slug;
    let id = note.id;
    let edit = Route::Edit(&note.slug).path();
    let delete = Route::Delete(&note.slug).path();

    document(
        &note.title,
        Some(user),
        rsx! {
            article { id: "note-{id}",
                h1 { "{title}" }
                p { class: "note-text", "{text}" }
                p { class: "note-slug", "Address: {slug}" }
            }
            a { href: "{edit}", "Edit" }
            " "
            a { href: "{delete}", "Delete" }
        },
    )
}

/// Confirmation page; the form posts back to the same address.
pub fn note_delete(user: &User, note: &Note) -> Html<String> {
    let title = &note.title;
    let action = Route::Delete(&note.slug).path();
    let detail = Route::Detail(&note.slug).path();

    document(
        "Delete the note",
        Some(user),
        rsx! {
            h1 { "Delete \"{title}\"?" }
            form { method: "post", action: "{action}",
                button { r#type: "submit", "Delete" }
                " "
                a { href: "{detail}", "Cancel" }
            }
        },
    )
}

pub fn success(user: &User) -> Html<String> {
    let list = Route::List.path();
    document(
        "Done",
        Some(user),
        rsx! {
            h1 { "Done!" }
            p { "The change has been saved. " a { href: "{list}", "Back to your notes" } "." }
        },
    )
}
