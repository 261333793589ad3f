//! Identity records backing password and OAuth sign-in.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(nullable)]
    pub password_hash: Option<String>,
    /// `email`, `google` or `facebook`
    pub provider: String,
    #[sea_orm(nullable)]
    pub provider_subject: Option<String>,
    /// Sign-up metadata: `first_name`, `last_name`, `full_name`, `avatar_url`, `picture`
    pub metadata: Json,
    pub email_confirmed: bool,
    #[sea_orm(nullable)]
    pub confirmation_token: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
