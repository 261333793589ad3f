use uuid::Uuid;

use crate::model::document::{FileType, UserDocumentDto};

impl From<entity::user_document::Model> for UserDocumentDto {
    fn from(row: entity::user_document::Model) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            user_email: row.user_email,
            user_name: row.user_name,
            file_name: row.file_name,
            file_url: row.file_url,
            file_type: FileType::from_db(&row.file_type),
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// Submitted document after its file has been uploaded.
#[derive(Clone, Debug)]
pub struct NewDocument {
    pub user_id: Uuid,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub file_name: String,
    pub file_url: String,
    pub file_type: FileType,
    pub message: Option<String>,
}
