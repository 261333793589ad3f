use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::content::AnnouncementRecord;

pub struct AnnouncementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnnouncementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active announcements, newest date first
    pub async fn list_active(&self) -> Result<Vec<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::Active.eq(true))
            .order_by_desc(entity::announcement::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        record: AnnouncementRecord,
    ) -> Result<entity::announcement::Model, DbErr> {
        let announcement = entity::announcement::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(record.title),
            description: ActiveValue::Set(Some(record.description)),
            image_url: ActiveValue::Set(record.image_url),
            date: ActiveValue::Set(record.date),
            end_date: ActiveValue::Set(record.end_date),
            active: ActiveValue::Set(record.active),
        };

        announcement.insert(self.db).await
    }

    /// Overwrites every field of an existing announcement
    ///
    /// Returns `Ok(None)` if the announcement does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        record: AnnouncementRecord,
    ) -> Result<Option<entity::announcement::Model>, DbErr> {
        let Some(announcement) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut announcement_am = announcement.into_active_model();
        announcement_am.title = ActiveValue::Set(record.title);
        announcement_am.description = ActiveValue::Set(Some(record.description));
        announcement_am.image_url = ActiveValue::Set(record.image_url);
        announcement_am.date = ActiveValue::Set(record.date);
        announcement_am.end_date = ActiveValue::Set(record.end_date);
        announcement_am.active = ActiveValue::Set(record.active);

        Ok(Some(announcement_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
