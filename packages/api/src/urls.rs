//! # URL-name registry
//!
//! Every page has a `namespace:name` (`notes:edit`, `users:login`, ...) and a path
//! pattern. The router mounts the patterns; handlers, pages and tests build links
//! through [`Route::path`] or [`reverse`] and never spell a path out themselves.
//!
//! | Name | Pattern |
//! |------|---------|
//! | `notes:home` | `/` |
//! | `notes:list` | `/notes/` |
//! | `notes:add` | `/add/` |
//! | `notes:detail` | `/note/{slug}/` |
//! | `notes:edit` | `/edit/{slug}/` |
//! | `notes:delete` | `/delete/{slug}/` |
//! | `notes:success` | `/done/` |
//! | `users:login` | `/auth/login/` |
//! | `users:logout` | `/auth/logout/` |
//! | `users:signup` | `/auth/signup/` |

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use store::is_valid_slug;

pub const HOME: &str = "/";
pub const LIST: &str = "/notes/";
pub const ADD: &str = "/add/";
pub const DETAIL: &str = "/note/{slug}/";
pub const EDIT: &str = "/edit/{slug}/";
pub const DELETE: &str = "/delete/{slug}/";
pub const SUCCESS: &str = "/done/";
pub const LOGIN: &str = "/auth/login/";
pub const LOGOUT: &str = "/auth/logout/";
pub const SIGNUP: &str = "/auth/signup/";

/// Characters escaped in the `next` query parameter. `/` stays readable.
const NEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("no route named {0:?}")]
    UnknownName(String),
    #[error("{name} takes {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{0:?} is not a valid slug")]
    InvalidArgument(String),
}

/// A resolvable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    List,
    Add,
    Detail(&'a str),
    Edit(&'a str),
    Delete(&'a str),
    Success,
    Login,
    Logout,
    Signup,
}

impl<'a> Route<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "notes:home",
            Route::List => "notes:list",
            Route::Add => "notes:add",
            Route::Detail(_) => "notes:detail",
            Route::Edit(_) => "notes:edit",
            Route::Delete(_) => "notes:delete",
            Route::Success => "notes:success",
            Route::Login => "users:login",
            Route::Logout => "users:logout",
            Route::Signup => "users:signup",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Route::Home => HOME,
            Route::List => LIST,
            Route::Add => ADD,
            Route::Detail(_) => DETAIL,
            Route::Edit(_) => EDIT,
            Route::Delete(_) => DELETE,
            Route::Success => SUCCESS,
            Route::Login => LOGIN,
            Route::Logout => LOGOUT,
            Route::Signup => SIGNUP,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Detail(slug) | Route::Edit(slug) | Route::Delete(slug) => {
                self.pattern().replace("{slug}", slug)
            }
            _ => self.pattern().to_string(),
        }
    }

    /// Look a route up by name with positional arguments.
    pub fn resolve(name: &str, args: &[&'a str]) -> Result<Self, UrlError> {
        let with_slug: fn(&'a str) -> Route<'a> = match name {
            "notes:detail" => Route::Detail,
            "notes:edit" => Route::Edit,
            "notes:delete" => Route::Delete,
            _ => {
                let route = match name {
                    "notes:home" => Route::Home,
                    "notes:list" => Route::List,
                    "notes:add" => Route::Add,
                    "notes:success" => Route::Success,
                    "users:login" => Route::Login,
                    "users:logout" => Route::Logout,
                    "users:signup" => Route::Signup,
                    _ => return Err(UrlError::UnknownName(name.to_string())),
                };
                if !args.is_empty() {
                    return Err(UrlError::Arity {
                        name: route.name(),
                        expected: 0,
                        got: args.len(),
                    });
                }
                return Ok(route);
            }
        };

        match args {
            [slug] if is_valid_slug(slug) => Ok(with_slug(*slug)),
            [slug] => Err(UrlError::InvalidArgument(slug.to_string())),
            _ => Err(UrlError::Arity {
                name: with_slug("").name(),
                expected: 1,
                got: args.len(),
            }),
        }
    }
}

/// Path for `name` with `args` filled in.
pub fn reverse(name: &str, args: &[&str]) -> Result<String, UrlError> {
    Route::resolve(name, args).map(|route| route.path())
}

/// Login page that sends the visitor back to `next` afterwards.
pub fn login_with_next(next: &str) -> String {
    format!("{LOGIN}?next={}", utf8_percent_encode(next, NEXT))
}

/// Whether `next` can be redirected to without leaving this site.
pub fn is_safe_next(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/\\")
}
