use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::content::EventRecord;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active events, newest date first
    pub async fn list_active(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Active.eq(true))
            .order_by_desc(entity::event::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, record: EventRecord) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(Some(record.description)),
            location: ActiveValue::Set(record.location),
            image_url: ActiveValue::Set(record.image_url),
            date: ActiveValue::Set(record.date),
            end_date: ActiveValue::Set(record.end_date),
            active: ActiveValue::Set(record.active),
        };

        event.insert(self.db).await
    }

    /// Returns `Ok(None)` if the event does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        record: EventRecord,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(event) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.title = ActiveValue::Set(record.title);
        event_am.description = ActiveValue::Set(Some(record.description));
        event_am.location = ActiveValue::Set(record.location);
        event_am.image_url = ActiveValue::Set(record.image_url);
        event_am.date = ActiveValue::Set(record.date);
        event_am.end_date = ActiveValue::Set(record.end_date);
        event_am.active = ActiveValue::Set(record.active);

        Ok(Some(event_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod list_active {
        use chrono::NaiveDate;
        use consularo_test_utils::prelude::*;

        use crate::server::data::content::event::EventRepository;

        /// Expect only active events
        #[tokio::test]
        async fn excludes_inactive_rows() -> Result<(), TestError> {
            let mut test = test_setup_with_content_tables!()?;
            test.content()
                .insert_event("Ziua Națională", NaiveDate::from_ymd_opt(2024, 12, 1), true)
                .await?;
            test.content()
                .insert_event("Anulat", NaiveDate::from_ymd_opt(2024, 12, 5), false)
                .await?;

            let repo = EventRepository::new(&test.state.db);
            let rows = repo.list_active().await?;

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].title, "Ziua Națională");

            Ok(())
        }
    }

    mod create {
        use chrono::NaiveDate;
        use consularo_test_utils::prelude::*;

        use crate::server::{
            data::content::event::EventRepository, model::content::EventRecord,
        };

        /// Expect the location to be stored
        #[tokio::test]
        async fn stores_location() -> Result<(), TestError> {
            let test = test_setup_with_content_tables!()?;

            let repo = EventRepository::new(&test.state.db);
            let created = repo
                .create(EventRecord {
                    id: None,
                    title: "Concert".to_string(),
                    description: String::new(),
                    location: Some("Roma".to_string()),
                    image_url: None,
                    date: NaiveDate::from_ymd_opt(2025, 1, 15),
                    end_date: None,
                    active: true,
                })
                .await?;

            let stored = repo.find_by_id(created.id).await?.unwrap();
            assert_eq!(stored.location.as_deref(), Some("Roma"));

            Ok(())
        }
    }
}
