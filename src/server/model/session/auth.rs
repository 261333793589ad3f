//! OAuth session state.
//!
//! The CSRF state and PKCE verifier are generated when the provider redirect is built,
//! stored in the session, and consumed exactly once by the callback.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "consularo:auth:csrf";

pub const SESSION_AUTH_PKCE_KEY: &str = "consularo:auth:pkce";

/// Session wrapper for the CSRF state token.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF state token into the session, replacing any previous token.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF state token without removing it.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF token found
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state token so it can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - CSRF token found and removed
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        match session.remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(Some(csrf)),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}

/// Session wrapper for the PKCE code verifier of a pending OAuth login.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthPkce(pub String);

impl SessionAuthPkce {
    pub async fn insert(session: &Session, verifier: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_PKCE_KEY, SessionAuthPkce(verifier.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the PKCE verifier, `None` when no login is pending.
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionAuthPkce>(SESSION_AUTH_PKCE_KEY)
            .await?
            .map(|SessionAuthPkce(verifier)| verifier))
    }
}
