//! # API crate — the YaNote web application
//!
//! Everything behind the HTTP boundary: configuration, storage, authentication,
//! URL names, page rendering and the handlers that tie them together. The `web`
//! binary only wires a real database and session store into [`router`].
//!
//! ## Modules
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | [`auth`]     | Argon2 password hashing, the session entry, `MaybeUser` / `CurrentUser` extractors |
//! | [`db`]       | SQLite pool, embedded migrations and the note/user queries |
//! | [`error`]    | `AppError`, rendered as a 404 page or a logged 500 page |
//! | [`models`]   | Database rows that never leave the server (`User` with its hash) |
//! | [`pages`]    | `rsx!` pages rendered with `dioxus-ssr` |
//! | [`settings`] | Layered configuration: defaults, `config.toml`, `NOTES_*` env vars |
//! | [`urls`]     | Route patterns and the `namespace:name` registry |
//! | [`views`]    | Axum handlers |

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod pages;
pub mod settings;
pub mod urls;
pub mod views;

mod app;

pub use app::{router, AppState};
pub use error::{AppError, AppResult};
pub use settings::Settings;
