//! Profile provisioning hook.
//!
//! Fired once after an identity is created. It writes the profile with the identity's email
//! and names in a detached task, racing the bootstrap that runs on the same sign-in.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::profile::ProfileRepository,
    error::Error,
    model::{identity::Identity, profile::ProfileSeed},
    service::profile::bootstrap::synthesize_profile,
};

/// Upserts `(id, email, first_name, last_name, role = user)` for a new identity
///
/// Names are derived the same way as the bootstrap derives them, so whichever of the two
/// writes first the row ends up with the same names. On conflict the email is overwritten
/// and names only when non-empty, other fields are kept.
pub async fn provision_profile<C: ConnectionTrait>(
    db: &C,
    identity: &Identity,
) -> Result<(), Error> {
    let seed = synthesize_profile(identity);

    ProfileRepository::new(db)
        .upsert_provisioned(ProfileSeed {
            avatar_url: None,
            ..seed
        })
        .await?;

    Ok(())
}

/// Runs [`provision_profile`] in a detached task, failures are logged and left to the bootstrap
pub fn spawn_profile_provisioning(db: DatabaseConnection, identity: Identity) {
    tokio::spawn(async move {
        if let Err(err) = provision_profile(&db, &identity).await {
            tracing::warn!(
                "Profile provisioning for user {} failed: {}",
                identity.id,
                err
            );
        }
    });
}
