use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::document::NewDocument;

/// Submitted documents, rows are never updated once created.
pub struct UserDocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserDocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        document: NewDocument,
    ) -> Result<entity::user_document::Model, DbErr> {
        let document = entity::user_document::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(document.user_id),
            user_email: ActiveValue::Set(document.user_email),
            user_name: ActiveValue::Set(document.user_name),
            file_name: ActiveValue::Set(document.file_name),
            file_url: ActiveValue::Set(document.file_url),
            file_type: ActiveValue::Set(document.file_type.as_str().to_string()),
            message: ActiveValue::Set(document.message),
            created_at: ActiveValue::Set(Utc::now()),
        };

        document.insert(self.db).await
    }

    /// Documents submitted by one user, newest first
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::user_document::Model>, DbErr> {
        entity::prelude::UserDocument::find()
            .filter(entity::user_document::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_document::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Every submitted document, newest first
    pub async fn list_all(&self) -> Result<Vec<entity::user_document::Model>, DbErr> {
        entity::prelude::UserDocument::find()
            .order_by_desc(entity::user_document::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
