//! Session bookkeeping for the logged-in user.

use tower_sessions::session::Error;
use tower_sessions::Session;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "_auth_user_id";

/// Id of the logged-in user, if any.
pub async fn user_id(session: &Session) -> Result<Option<i64>, Error> {
    session.get(SESSION_USER_ID_KEY).await
}

/// Bind `user` to the session under a fresh session id.
pub async fn login(session: &Session, user: &store::User) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await
}

/// Forget everything stored for this visitor.
pub async fn logout(session: &Session) -> Result<(), Error> {
    session.flush().await
}
