pub use sea_orm_migration::prelude::*;

mod m20251201_000001_auth_user;
mod m20251201_000002_profile;
mod m20251201_000003_announcement;
mod m20251201_000004_event;
mod m20251201_000005_alert;
mod m20251201_000006_user_document;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_auth_user::Migration),
            Box::new(m20251201_000002_profile::Migration),
            Box::new(m20251201_000003_announcement::Migration),
            Box::new(m20251201_000004_event::Migration),
            Box::new(m20251201_000005_alert::Migration),
            Box::new(m20251201_000006_user_document::Migration),
        ]
    }
}
