use sea_orm_migration::{prelude::*, schema::*};

static IDX_AUTH_USER_PROVIDER_SUBJECT: &str = "idx-auth_users-provider-provider_subject";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUser::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuthUser::Id))
                    .col(string_uniq(AuthUser::Email))
                    .col(string_null(AuthUser::PasswordHash))
                    .col(string(AuthUser::Provider))
                    .col(string_null(AuthUser::ProviderSubject))
                    .col(json_binary(AuthUser::Metadata))
                    .col(boolean(AuthUser::EmailConfirmed).default(false))
                    .col(string_null(AuthUser::ConfirmationToken))
                    .col(timestamp_with_time_zone(AuthUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUTH_USER_PROVIDER_SUBJECT)
                    .table(AuthUser::Table)
                    .col(AuthUser::Provider)
                    .col(AuthUser::ProviderSubject)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUTH_USER_PROVIDER_SUBJECT)
                    .table(AuthUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuthUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthUser {
    #[sea_orm(iden = "auth_users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Provider,
    ProviderSubject,
    Metadata,
    EmailConfirmed,
    ConfirmationToken,
    CreatedAt,
}
