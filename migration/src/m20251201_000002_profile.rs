use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_auth_user::AuthUser;

static FK_PROFILE_ID: &str = "fk-profiles-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_uuid(Profile::Id))
                    .col(string_null(Profile::Email))
                    .col(string_null(Profile::FirstName))
                    .col(string_null(Profile::LastName))
                    .col(string_null(Profile::Phone))
                    .col(string_null(Profile::Address))
                    .col(string_null(Profile::City))
                    .col(string_null(Profile::County))
                    .col(string_null(Profile::Country))
                    .col(string_null(Profile::PostCode))
                    .col(string_null(Profile::Username))
                    .col(string_null(Profile::AvatarUrl))
                    .col(string(Profile::Role).default("user"))
                    .col(timestamp_with_time_zone_null(Profile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_ID)
                    .from_tbl(Profile::Table)
                    .from_col(Profile::Id)
                    .to_tbl(AuthUser::Table)
                    .to_col(AuthUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROFILE_ID)
                    .table(Profile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Phone,
    Address,
    City,
    County,
    Country,
    PostCode,
    Username,
    AvatarUrl,
    Role,
    UpdatedAt,
}
