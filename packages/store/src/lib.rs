//! # Store crate — the notes domain without any I/O
//!
//! Everything here is plain data and pure functions, shared by the `api` crate's
//! handlers and its database layer:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Note` and `User` records plus the drafts used to create or update them |
//! | [`slug`] | Transliterating [`slugify`](slug::slugify) and the slug syntax check |
//! | [`forms`] | Validation of the note, signup and login forms into drafts or [`FormErrors`] |

pub mod forms;
pub mod models;
pub mod slug;

pub use forms::{FormErrors, LoginForm, NoteForm, SignupForm};
pub use models::{NewUser, Note, NoteDraft, User};
pub use slug::{is_valid_slug, slugify};
