//! Documents submitted by users for consular review.
//!
//! `user_id` is not a foreign key, documents outlive the profile of the user who
//! submitted them.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(nullable)]
    pub user_email: Option<String>,
    #[sea_orm(nullable)]
    pub user_name: Option<String>,
    pub file_name: String,
    pub file_url: String,
    /// `image` or `pdf`
    pub file_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
