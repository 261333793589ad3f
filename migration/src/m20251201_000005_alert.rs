use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alert::Table)
                    .if_not_exists()
                    .col(pk_uuid(Alert::Id))
                    .col(string(Alert::Title))
                    .col(text_null(Alert::Message))
                    .col(string(Alert::Type).default("info"))
                    .col(string_null(Alert::Country))
                    .col(boolean(Alert::Active).default(true))
                    .col(timestamp_with_time_zone(Alert::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Alert {
    #[sea_orm(iden = "alerts")]
    Table,
    Id,
    Title,
    Message,
    Type,
    Country,
    Active,
    CreatedAt,
}
