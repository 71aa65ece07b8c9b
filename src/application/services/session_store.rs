use std::sync::Arc;

use crate::application::ports::{KeyValueStore, StoreError};
use crate::domain::{Session, User};

const TOKEN_KEY: &str = "userToken";
const USER_KEY: &str = "userData";
const ONBOARDING_KEY: &str = "hasSeenOnboarding";
const THEME_KEY: &str = "isDarkTheme";

/// Persisted authentication and UI preferences. Token and profile are
/// written together and cleared together.
pub struct SessionStore<S>
where
    S: KeyValueStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> SessionStore<S>
where
    S: KeyValueStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn save_session(&self, session: &Session) -> Result<(), SessionStoreError> {
        let profile = serde_json::to_string(&session.user).map_err(SessionStoreError::Encode)?;
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_KEY, &profile)?;
        Ok(())
    }

    pub fn load_session(&self) -> Result<Option<Session>, SessionStoreError> {
        let Some(token) = self.store.get(TOKEN_KEY)? else {
            return Ok(None);
        };
        let Some(raw_user) = self.store.get(USER_KEY)? else {
            // Half a session is no session.
            return Ok(None);
        };
        let user: User = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable stored profile");
                return Ok(None);
            }
        };
        Ok(Some(Session { token, user }))
    }

    pub fn clear_session(&self) -> Result<(), SessionStoreError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }

    pub fn mark_onboarding_seen(&self) -> Result<(), SessionStoreError> {
        self.store.set(ONBOARDING_KEY, "true")?;
        Ok(())
    }

    pub fn onboarding_seen(&self) -> Result<bool, SessionStoreError> {
        Ok(self.store.get(ONBOARDING_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_dark_theme(&self, enabled: bool) -> Result<(), SessionStoreError> {
        self.store.set(THEME_KEY, if enabled { "true" } else { "false" })?;
        Ok(())
    }

    pub fn dark_theme(&self) -> Result<bool, SessionStoreError> {
        Ok(self.store.get(THEME_KEY)?.as_deref() == Some("true"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("store: {0}")]
    Store(#[from] StoreError),
    #[error("encoding profile: {0}")]
    Encode(#[source] serde_json::Error),
}
