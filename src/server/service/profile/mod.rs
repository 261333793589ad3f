//! Profile service layer.
//!
//! Operations on the signed-in user's own profile: reading it (with bootstrap), saving the
//! editable fields, uploading an avatar and deleting the account.

pub mod bootstrap;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::user::ProfileUpdateDto,
    server::{
        data::{identity::AuthUserRepository, profile::ProfileRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{db::ProfileModel, identity::Identity, profile::ProfileChanges, upload::UploadedFile},
        service::profile::bootstrap::ensure_profile,
        storage::{user_object_name, Bucket, StorageClient},
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a StorageClient,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a StorageClient) -> Self {
        Self { db, storage }
    }

    async fn identity(&self, user_id: Uuid) -> Result<Identity, Error> {
        AuthUserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|user| Identity::from(&user))
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Profile of the user, bootstrapped if missing
    ///
    /// # Returns
    /// - `Ok(ProfileModel)` - The user's profile
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - The identity no longer exists
    pub async fn get_profile(&self, user_id: Uuid) -> Result<ProfileModel, Error> {
        let identity = self.identity(user_id).await?;

        ensure_profile(self.db, &identity).await
    }

    /// Upserts the editable profile fields keyed on the user ID
    ///
    /// Empty strings are stored as `NULL` and `updated_at` is set. The role can't be
    /// changed here.
    pub async fn save_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdateDto,
    ) -> Result<ProfileModel, Error> {
        let identity = self.identity(user_id).await?;

        let profile = ProfileRepository::new(self.db)
            .save(user_id, Some(identity.email), ProfileChanges::from(update))
            .await?;

        Ok(profile)
    }

    /// Uploads an avatar to `profile_images` as `{user_id}-{millis}.{ext}`
    ///
    /// Returns the public URL, the profile itself is updated by a following save.
    pub async fn upload_avatar(&self, user_id: Uuid, file: UploadedFile) -> Result<String, Error> {
        if !file.content_type.starts_with("image/") {
            return Err(ValidationError::InvalidUpload(format!(
                "expected an image, got {}",
                file.content_type
            ))
            .into());
        }

        let path = user_object_name(user_id, &file.file_name);
        let url = self
            .storage
            .upload(Bucket::ProfileImages, &path, &file.content_type, file.bytes)
            .await?;

        Ok(url)
    }

    /// Deletes the profile row and the identity in one transaction
    ///
    /// Submitted documents and authored content are kept. Clearing the session is left to
    /// the caller.
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let profile_result = ProfileRepository::new(&txn).delete(user_id).await?;
        let identity_result = AuthUserRepository::new(&txn).delete(user_id).await?;

        if identity_result.rows_affected == 0 {
            txn.rollback().await?;

            return Err(AuthError::UserNotInDatabase(user_id).into());
        }

        txn.commit().await?;

        tracing::info!(
            "Deleted account {} (profile rows removed: {})",
            user_id,
            profile_result.rows_affected
        );

        Ok(())
    }
}
