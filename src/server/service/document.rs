//! Document submission for consular review.
//!
//! A submission is an upload to the `documents` bucket followed by a row insert. The two
//! are not transactional, when the insert fails the uploaded object is removed on a best
//! effort basis so no unreferenced file is left behind.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        document::{FileType, UserDocumentDto},
        user::UserProfileDto,
    },
    server::{
        data::{document::UserDocumentRepository, identity::AuthUserRepository},
        error::{auth::AuthError, Error},
        model::{document::NewDocument, identity::Identity, upload::UploadedFile},
        service::profile::bootstrap::ensure_profile,
        storage::{user_object_name, Bucket, StorageClient},
        util::form::blank_to_none,
    },
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a StorageClient,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a StorageClient) -> Self {
        Self { db, storage }
    }

    /// Uploads a document and records it with the submitter's name and email
    ///
    /// # Returns
    /// - `Ok(UserDocumentDto)` - The stored document
    /// - `Err(Error::StorageError)` - Upload failed, nothing was written
    /// - `Err(Error::DbErr)` - Insert failed, the uploaded object was removed if possible
    pub async fn submit_document(
        &self,
        user_id: Uuid,
        file: UploadedFile,
        message: Option<String>,
    ) -> Result<UserDocumentDto, Error> {
        let user = AuthUserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;
        let profile = UserProfileDto::from(ensure_profile(self.db, &Identity::from(&user)).await?);

        let path = user_object_name(user_id, &file.file_name);
        let file_type = FileType::from_content_type(&file.content_type);
        let file_url = self
            .storage
            .upload(Bucket::Documents, &path, &file.content_type, file.bytes)
            .await?;

        let user_name = Some(profile.display_name()).filter(|name| !name.is_empty());
        let inserted = UserDocumentRepository::new(self.db)
            .create(NewDocument {
                user_id,
                user_email: profile.email.or(Some(user.email)),
                user_name,
                file_name: file.file_name,
                file_url,
                file_type,
                message: blank_to_none(message),
            })
            .await;

        match inserted {
            Ok(document) => Ok(UserDocumentDto::from(document)),
            Err(insert_err) => {
                if let Err(remove_err) = self.storage.remove(Bucket::Documents, &path).await {
                    tracing::warn!(
                        "Failed to remove document {} after insert failure: {}",
                        path,
                        remove_err
                    );
                }

                Err(insert_err.into())
            }
        }
    }

    /// Documents submitted by the user, newest first
    pub async fn list_my_documents(&self, user_id: Uuid) -> Result<Vec<UserDocumentDto>, Error> {
        let documents = UserDocumentRepository::new(self.db)
            .list_by_user(user_id)
            .await?;

        Ok(documents.into_iter().map(UserDocumentDto::from).collect())
    }
}
