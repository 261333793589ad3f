//! User profile, keyed by the identity ID.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    #[sea_orm(nullable)]
    pub first_name: Option<String>,
    #[sea_orm(nullable)]
    pub last_name: Option<String>,
    #[sea_orm(nullable)]
    pub phone: Option<String>,
    #[sea_orm(nullable)]
    pub address: Option<String>,
    #[sea_orm(nullable)]
    pub city: Option<String>,
    #[sea_orm(nullable)]
    pub county: Option<String>,
    #[sea_orm(nullable)]
    pub country: Option<String>,
    #[sea_orm(nullable)]
    pub post_code: Option<String>,
    #[sea_orm(nullable)]
    pub username: Option<String>,
    #[sea_orm(nullable)]
    pub avatar_url: Option<String>,
    /// `user`, `admin` or `super_admin`
    pub role: String,
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_user::Entity",
        from = "Column::Id",
        to = "super::auth_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AuthUser,
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
