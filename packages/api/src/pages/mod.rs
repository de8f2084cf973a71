//! # Server-rendered pages
//!
//! Every page is an `rsx!` tree wrapped in [`document`] and rendered to a string
//! with `dioxus-ssr`, which escapes all text and attribute values. Page functions
//! take plain data and return [`Html`], so handlers stay free of markup.

use axum::response::Html;
use dioxus::prelude::*;

use crate::urls::Route;

mod notes;
mod users;

pub use notes::{home, note_delete, note_detail, note_form, note_list, success, NoteFormKind};
pub use users::{logged_out, login, signup};

const SITE_NAME: &str = "YaNote";

/// Wrap `body` in the site layout: header with navigation, then the page.
fn document(title: &str, user: Option<&store::User>, body: Element) -> Html<String> {
    let home = Route::Home.path();
    let site = SITE_NAME;
    let account = match user {
        Some(user) => {
            let list = Route::List.path();
            let add = Route::Add.path();
            let logout = Route::Logout.path();
            let username = &user.username;
            rsx! {
                a { href: "{list}", "All notes" }
                a { href: "{add}", "Add a note" }
                form { class: "inline", method: "post", action: "{logout}",
                    button { r#type: "submit", "Log out ({username})" }
                }
            }
        }
        None => {
            let login = Route::Login.path();
            let signup = Route::Signup.path();
            rsx! {
                a { href: "{login}", "Log in" }
                a { href: "{signup}", "Sign up" }
            }
        }
    };

    let page = rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title} | {site}" }
            style {
                r#"
                body {{ font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; color: #37352f; }}
                header nav {{ display: flex; gap: 1rem; align-items: center; border-bottom: 1px solid #e9e9e7; padding-bottom: 0.5rem; }}
                form.inline {{ display: inline; }}
                .errorlist {{ color: #b42318; }}
                label {{ display: block; margin-top: 0.75rem; }}
                "#
            }
        }
        body {
            header {
                nav {
                    a { href: "{home}", strong { "{site}" } }
                    {account}
                }
            }
            main { {body} }
        }
    };

    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}

/// Validation messages for one field, or nothing.
fn field_errors(messages: &[String]) -> Element {
    rsx! {
        if !messages.is_empty() {
            ul { class: "errorlist",
                for message in messages.iter() {
                    li { "{message}" }
                }
            }
        }
    }
}

pub fn not_found() -> Html<String> {
    document(
        "Not found",
        None,
        rsx! {
            h1 { "Not found" }
            p { "The requested page does not exist." }
        },
    )
}

pub fn server_error() -> Html<String> {
    document(
        "Server error",
        None,
        rsx! {
            h1 { "Something went wrong" }
            p { "Please try again later." }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_escapes_and_shows_navigation() {
        let user = store::User {
            id: 1,
            username: "<script>".into(),
        };
        let text = "body & more";
        let Html(html) = document("Title", Some(&user), rsx! { p { "{text}" } });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("body &amp; more"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("href=\"/notes/\""));
        assert!(html.contains("action=\"/auth/logout/\""));

        let Html(html) = document("Title", None, rsx! {});
        assert!(html.contains("href=\"/auth/login/\""));
        assert!(html.contains("href=\"/auth/signup/\""));
        assert!(!html.contains("action=\"/auth/logout/\""));
    }

    #[test]
    fn test_field_errors() {
        let html = dioxus_ssr::render_element(field_errors(&["Bad value".to_string()]));
        assert!(html.contains("class=\"errorlist\""));
        assert!(html.contains("Bad value"));
        assert!(!dioxus_ssr::render_element(field_errors(&[])).contains("errorlist"));
    }
}
