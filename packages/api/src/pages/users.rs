use axum::response::Html;
use dioxus::prelude::*;
use store::{FormErrors, LoginForm, SignupForm};

use super::{document, field_errors};
use crate::urls::Route;

/// Login form. Passwords are never echoed back.
pub fn login(form: &LoginForm, errors: &FormErrors) -> Html<String> {
    let action = Route::Login.path();
    let signup = Route::Signup.path();
    let username = &form.username;
    let next = form.next.clone().unwrap_or_default();

    document(
        "Log in",
        None,
        rsx! {
            h1 { "Log in" }
            form { id: "login-form", method: "post", action: "{action}",
                {field_errors(errors.non_field())}
                label { r#for: "id_username", "Username" }
                input { id: "id_username", r#type: "text", name: "username", value: "{username}" }
                {field_errors(errors.field(LoginForm::USERNAME))}
                label { r#for: "id_password", "Password" }
                input { id: "id_password", r#type: "password", name: "password" }
                {field_errors(errors.field(LoginForm::PASSWORD))}
                input { r#type: "hidden", name: "next", value: "{next}" }
                button { r#type: "submit", "Log in" }
            }
            p { "No account yet? " a { href: "{signup}", "Sign up" } "." }
        },
    )
}

pub fn signup(form: &SignupForm, errors: &FormErrors) -> Html<String> {
    let action = Route::Signup.path();
    let username = &form.username;

    document(
        "Sign up",
        None,
        rsx! {
            h1 { "Sign up" }
            form { id: "signup-form", method: "post", action: "{action}",
                {field_errors(errors.non_field())}
                label { r#for: "id_username", "Username" }
                input { id: "id_username", r#type: "text", name: "username", maxlength: "150", value: "{username}" }
                {field_errors(errors.field(SignupForm::USERNAME))}
                label { r#for: "id_password1", "Password" }
                input { id: "id_password1", r#type: "password", name: "password1" }
                {field_errors(errors.field(SignupForm::PASSWORD1))}
                label { r#for: "id_password2", "Password confirmation" }
                input { id: "id_password2", r#type: "password", name: "password2" }
                {field_errors(errors.field(SignupForm::PASSWORD2))}
                button { r#type: "submit", "Sign up" }
            }
        },
    )
}

pub fn logged_out() -> Html<String> {
    let login = Route::Login.path();
    document(
        "Logged out",
        None,
        rsx! {
            h1 { "You have been logged out" }
            p { a { href: "{login}", "Log in again" } }
        },
    )
}
