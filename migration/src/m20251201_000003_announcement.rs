use sea_orm_migration::{prelude::*, schema::*};

static IDX_ANNOUNCEMENT_ACTIVE_DATE: &str = "idx-announcements-active-date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_uuid(Announcement::Id))
                    .col(string(Announcement::Title))
                    .col(text_null(Announcement::Description))
                    .col(string_null(Announcement::ImageUrl))
                    .col(date_null(Announcement::Date))
                    .col(date_null(Announcement::EndDate))
                    .col(boolean(Announcement::Active).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ANNOUNCEMENT_ACTIVE_DATE)
                    .table(Announcement::Table)
                    .col(Announcement::Active)
                    .col(Announcement::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ANNOUNCEMENT_ACTIVE_DATE)
                    .table(Announcement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Announcement {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Date,
    EndDate,
    Active,
}
