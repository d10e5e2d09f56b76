//! Type-safe session management wrappers.
//!
//! Session keys and value types live here so handlers never touch raw keys. The
//! session itself is persisted by `tower-sessions` in the SQLite store configured in
//! `startup`.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores the ID of the logged in user. Login cycles the session ID before writing it
/// so a session fixed before authentication cannot be reused.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as belonging to `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - User ID stored under a fresh session ID
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
