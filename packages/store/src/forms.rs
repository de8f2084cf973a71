//! # Form validation — submitted fields in, drafts or errors out
//!
//! Every form is deserialised straight from an `application/x-www-form-urlencoded`
//! body, so missing fields default to empty strings. Text fields are trimmed before
//! validation.
//!
//! - [`NoteForm::validate`] yields a [`NoteDraft`]. A blank slug is derived from the
//!   title with [`slugify`] and cut to [`MAX_SLUG_LEN`] characters. Uniqueness of the
//!   slug needs the database, so the caller checks it and reports a clash with
//!   [`FormErrors::add`] on [`NoteForm::SLUG`].
//! - [`SignupForm::validate`] yields a [`NewUser`]; whether the username is taken is
//!   again left to the caller.
//! - [`LoginForm::validate`] only checks that both fields are present.
//!
//! Failing validation returns [`FormErrors`], which the page renderer shows next to
//! each field.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{NewUser, Note, NoteDraft};
use crate::slug::{is_valid_slug, slugify, MAX_SLUG_LEN};

/// Longest note title.
pub const MAX_TITLE_LEN: usize = 100;
/// Longest username.
pub const MAX_USERNAME_LEN: usize = 150;
/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 8;

const REQUIRED: &str = "This field is required.";

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    /// Key for errors that do not belong to a single field.
    pub const NON_FIELD: &'static str = "__all__";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn non_field(&self) -> &[String] {
        self.field(Self::NON_FIELD)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Add / edit note form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoteForm {
    pub title: String,
    pub text: String,
    pub slug: String,
}

impl NoteForm {
    pub const TITLE: &'static str = "title";
    pub const TEXT: &'static str = "text";
    pub const SLUG: &'static str = "slug";

    /// Form pre-filled with an existing note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
        }
    }

    pub fn validate(&self) -> Result<NoteDraft, FormErrors> {
        let mut errors = FormErrors::new();
        let title = self.title.trim();
        let text = self.text.trim();
        let slug = self.slug.trim();

        if title.is_empty() {
            errors.add(Self::TITLE, REQUIRED);
        } else if title.chars().count() > MAX_TITLE_LEN {
            errors.add(
                Self::TITLE,
                format!("Ensure this value has at most {MAX_TITLE_LEN} characters."),
            );
        }

        if text.is_empty() {
            errors.add(Self::TEXT, REQUIRED);
        }

        let slug = if slug.is_empty() {
            let derived: String = slugify(title).chars().take(MAX_SLUG_LEN).collect();
            // The title error already tells the user what to fix.
            if derived.is_empty() && !title.is_empty() {
                errors.add(
                    Self::SLUG,
                    "Could not build an address from the title, please enter one.",
                );
            }
            derived
        } else {
            if slug.chars().count() > MAX_SLUG_LEN {
                errors.add(
                    Self::SLUG,
                    format!("Ensure this value has at most {MAX_SLUG_LEN} characters."),
                );
            }
            if !is_valid_slug(slug) {
                errors.add(
                    Self::SLUG,
                    "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
                );
            }
            slug.to_string()
        };

        errors.into_result(NoteDraft {
            title: title.to_string(),
            text: text.to_string(),
            slug,
        })
    }
}

/// Message shown when a slug is already in use.
pub fn duplicate_slug_message(slug: &str) -> String {
    format!("{slug} - this slug already exists, please choose a unique one!")
}

/// Account creation form.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl SignupForm {
    pub const USERNAME: &'static str = "username";
    pub const PASSWORD1: &'static str = "password1";
    pub const PASSWORD2: &'static str = "password2";

    pub fn validate(&self) -> Result<NewUser, FormErrors> {
        let mut errors = FormErrors::new();
        let username = self.username.trim();

        if username.is_empty() {
            errors.add(Self::USERNAME, REQUIRED);
        } else if username.chars().count() > MAX_USERNAME_LEN {
            errors.add(
                Self::USERNAME,
                format!("Ensure this value has at most {MAX_USERNAME_LEN} characters."),
            );
        } else if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            errors.add(
                Self::USERNAME,
                "Enter a valid username. It may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }

        if self.password1.is_empty() {
            errors.add(Self::PASSWORD1, REQUIRED);
        }
        if self.password2.is_empty() {
            errors.add(Self::PASSWORD2, REQUIRED);
        }
        if !self.password1.is_empty() && !self.password2.is_empty() {
            if self.password1 != self.password2 {
                errors.add(Self::PASSWORD2, "The two password fields didn't match.");
            } else {
                check_password_strength(&self.password1, username, &mut errors);
            }
        }

        errors.into_result(NewUser {
            username: username.to_string(),
            password: self.password1.clone(),
        })
    }
}

fn check_password_strength(password: &str, username: &str, errors: &mut FormErrors) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            SignupForm::PASSWORD2,
            format!("This password is too short. It must contain at least {MIN_PASSWORD_LEN} characters."),
        );
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        errors.add(SignupForm::PASSWORD2, "This password is entirely numeric.");
    }
    if !username.is_empty() && password.to_lowercase() == username.to_lowercase() {
        errors.add(
            SignupForm::PASSWORD2,
            "The password is too similar to the username.",
        );
    }
}

/// Credentials form. `next` travels as a hidden field.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

impl LoginForm {
    pub const USERNAME: &'static str = "username";
    pub const PASSWORD: &'static str = "password";

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.username.trim().is_empty() {
            errors.add(Self::USERNAME, REQUIRED);
        }
        if self.password.is_empty() {
            errors.add(Self::PASSWORD, REQUIRED);
        }
        errors.into_result(())
    }

    /// Message for unknown usernames and wrong passwords alike.
    pub fn invalid_credentials() -> FormErrors {
        let mut errors = FormErrors::new();
        errors.add(
            FormErrors::NON_FIELD,
            "Please enter a correct username and password. Note that both fields may be case-sensitive.",
        );
        errors
    }
}
