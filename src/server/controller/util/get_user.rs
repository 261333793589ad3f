use dioxus_logger::tracing;
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::ProfileModel, session::user::SessionUserId},
    service::auth::AuthService,
};

/// Retrieves the signed-in user's ID from the session
///
/// # Returns
/// - `Ok(Uuid)`: User ID present in session
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user signed in
pub async fn get_user_id_from_session(session: &Session) -> Result<Uuid, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user_id)
}

/// Retrieves the signed-in user's profile, bootstrapping it if missing
///
/// # Arguments
/// - `state`: Application state with database connection & auth settings
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(ProfileModel)`: Profile of the signed-in user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but the
///   identity was deleted (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_profile_from_session(
    state: &AppState,
    session: &Session,
) -> Result<ProfileModel, Error> {
    let user_id = get_user_id_from_session(session).await?;

    let Some(profile) = AuthService::new(&state.db, &state.auth)
        .session(user_id)
        .await?
    else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(profile)
}

/// Like [`get_profile_from_session`] but answers `None` for anonymous visitors
pub async fn maybe_profile_from_session(
    state: &AppState,
    session: &Session,
) -> Result<Option<ProfileModel>, Error> {
    match get_profile_from_session(state, session).await {
        Ok(profile) => Ok(Some(profile)),
        Err(Error::AuthError(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
