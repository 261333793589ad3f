use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn content<'a>(&'a mut self) -> ContentFixtures<'a> {
        ContentFixtures { setup: self }
    }
}

pub struct ContentFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ContentFixtures<'a> {
    pub async fn insert_announcement(
        &self,
        title: &str,
        date: Option<NaiveDate>,
        active: bool,
    ) -> Result<entity::announcement::Model, TestError> {
        Ok(
            entity::prelude::Announcement::insert(entity::announcement::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(Some(String::new())),
                image_url: ActiveValue::Set(None),
                date: ActiveValue::Set(date),
                end_date: ActiveValue::Set(None),
                active: ActiveValue::Set(active),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_event(
        &self,
        title: &str,
        date: Option<NaiveDate>,
        active: bool,
    ) -> Result<entity::event::Model, TestError> {
        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(Some(String::new())),
                location: ActiveValue::Set(Some("Institutul Cultural Român".to_string())),
                image_url: ActiveValue::Set(None),
                date: ActiveValue::Set(date),
                end_date: ActiveValue::Set(None),
                active: ActiveValue::Set(active),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert an alert, `country` of `None` makes it global
    pub async fn insert_alert(
        &self,
        title: &str,
        country: Option<&str>,
        active: bool,
    ) -> Result<entity::alert::Model, TestError> {
        Ok(
            entity::prelude::Alert::insert(entity::alert::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                title: ActiveValue::Set(title.to_string()),
                message: ActiveValue::Set(None),
                severity: ActiveValue::Set("info".to_string()),
                country: ActiveValue::Set(country.map(str::to_string)),
                active: ActiveValue::Set(active),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
