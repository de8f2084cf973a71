//! Authentication: password hashing, the session entry and the extractors that
//! gate protected pages.

mod extract;
pub mod password;
mod session;

pub use extract::{CurrentUser, MaybeUser};
pub use password::{hash_password, verify_password};
pub use session::{login, logout, user_id, SESSION_USER_ID_KEY};
