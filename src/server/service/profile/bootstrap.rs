//! Profile bootstrap reconciliation.
//!
//! Runs after every successful authentication and on session retrieval to make sure the
//! authenticated identity has a profile row. The provisioning hook fired at identity
//! creation may be writing the same row concurrently, so the bootstrap only ever issues
//! one idempotent upsert keyed on the user ID and reports what it found.

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::profile::ProfileRepository,
    error::Error,
    model::{db::ProfileModel, identity::Identity, profile::ProfileSeed},
};

#[derive(Debug)]
pub enum BootstrapOutcome {
    /// The profile already existed, or appeared after a failed upsert
    Found(ProfileModel),
    /// The upsert succeeded, the row may have been written by the provisioning hook
    Created(ProfileModel),
    /// No profile could be read or written
    Unresolved(String),
}

/// Minimal profile derived from identity metadata
///
/// Names come from `first_name`/`last_name`. When the first name is empty and a
/// `full_name` is present, it is split on the first space. The avatar is `avatar_url`,
/// falling back to `picture`.
pub fn synthesize_profile(identity: &Identity) -> ProfileSeed {
    let metadata = &identity.metadata;

    let mut first_name = metadata.first_name.clone().filter(|n| !n.trim().is_empty());
    let mut last_name = metadata.last_name.clone().filter(|n| !n.trim().is_empty());

    if first_name.is_none() {
        if let Some(full_name) = metadata
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            match full_name.split_once(' ') {
                Some((first, rest)) => {
                    first_name = Some(first.to_string());
                    last_name = Some(rest.trim().to_string()).filter(|n| !n.is_empty());
                }
                None => first_name = Some(full_name.to_string()),
            }
        }
    }

    let avatar_url = metadata
        .avatar_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| metadata.picture.clone().filter(|url| !url.trim().is_empty()));

    ProfileSeed {
        id: identity.id,
        email: Some(identity.email.clone()),
        first_name,
        last_name,
        avatar_url,
    }
}

/// Ensures a profile row exists for the identity
///
/// # Returns
/// - `Ok(BootstrapOutcome)` - The reconciliation result, `Unresolved` is not an error here
/// - `Err(Error::DbErr)` - The initial profile read failed
pub async fn bootstrap_profile<C: ConnectionTrait>(
    db: &C,
    identity: &Identity,
) -> Result<BootstrapOutcome, Error> {
    let profile_repo = ProfileRepository::new(db);

    if let Some(profile) = profile_repo.find_by_id(identity.id).await? {
        return Ok(BootstrapOutcome::Found(profile));
    }

    match profile_repo.upsert_bootstrap(synthesize_profile(identity)).await {
        Ok(()) => match profile_repo.find_by_id(identity.id).await {
            Ok(Some(profile)) => Ok(BootstrapOutcome::Created(profile)),
            Ok(None) => Ok(BootstrapOutcome::Unresolved(
                "profile missing after upsert".to_string(),
            )),
            Err(read_err) => Ok(BootstrapOutcome::Unresolved(format!(
                "read after upsert failed: {}",
                read_err
            ))),
        },
        Err(upsert_err) => {
            tracing::warn!(
                "Profile upsert for user {} failed, falling back to a final read: {}",
                identity.id,
                upsert_err
            );

            match profile_repo.find_by_id(identity.id).await {
                Ok(Some(profile)) => Ok(BootstrapOutcome::Found(profile)),
                Ok(None) => Ok(BootstrapOutcome::Unresolved(format!(
                    "upsert failed: {}",
                    upsert_err
                ))),
                Err(read_err) => Ok(BootstrapOutcome::Unresolved(format!(
                    "upsert failed: {}; final read failed: {}",
                    upsert_err, read_err
                ))),
            }
        }
    }
}

/// Runs the bootstrap and returns the profile row
///
/// # Returns
/// - `Ok(ProfileModel)` - Existing or newly created profile
/// - `Err(Error::ProfileUnresolved)` - No profile could be read or written
/// - `Err(Error::DbErr)` - The initial profile read failed
pub async fn ensure_profile<C: ConnectionTrait>(
    db: &C,
    identity: &Identity,
) -> Result<ProfileModel, Error> {
    match bootstrap_profile(db, identity).await? {
        BootstrapOutcome::Found(profile) | BootstrapOutcome::Created(profile) => Ok(profile),
        BootstrapOutcome::Unresolved(reason) => Err(Error::ProfileUnresolved {
            user_id: identity.id,
            reason,
        }),
    }
}
