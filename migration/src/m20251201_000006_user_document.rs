use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_DOCUMENT_USER_ID: &str = "idx-user_documents-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDocument::Table)
                    .if_not_exists()
                    .col(pk_uuid(UserDocument::Id))
                    .col(uuid(UserDocument::UserId))
                    .col(string_null(UserDocument::UserEmail))
                    .col(string_null(UserDocument::UserName))
                    .col(string(UserDocument::FileName))
                    .col(string(UserDocument::FileUrl))
                    .col(string(UserDocument::FileType))
                    .col(text_null(UserDocument::Message))
                    .col(timestamp_with_time_zone(UserDocument::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // No foreign key to profiles, documents are kept when an account is deleted
        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_DOCUMENT_USER_ID)
                    .table(UserDocument::Table)
                    .col(UserDocument::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_DOCUMENT_USER_ID)
                    .table(UserDocument::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserDocument::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserDocument {
    #[sea_orm(iden = "user_documents")]
    Table,
    Id,
    UserId,
    UserEmail,
    UserName,
    FileName,
    FileUrl,
    FileType,
    Message,
    CreatedAt,
}
