use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVENT_ACTIVE_DATE: &str = "idx-events-active-date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_uuid(Event::Id))
                    .col(string(Event::Title))
                    .col(text_null(Event::Description))
                    .col(string_null(Event::Location))
                    .col(string_null(Event::ImageUrl))
                    .col(date_null(Event::Date))
                    .col(date_null(Event::EndDate))
                    .col(boolean(Event::Active).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_ACTIVE_DATE)
                    .table(Event::Table)
                    .col(Event::Active)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_ACTIVE_DATE)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Title,
    Description,
    Location,
    ImageUrl,
    Date,
    EndDate,
    Active,
}
