use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::content::AlertRecord;

pub struct AlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlertRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active alerts for every country, newest first
    ///
    /// Country targeting is applied by the caller.
    pub async fn list_active(&self) -> Result<Vec<entity::alert::Model>, DbErr> {
        entity::prelude::Alert::find()
            .filter(entity::alert::Column::Active.eq(true))
            .order_by_desc(entity::alert::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::alert::Model>, DbErr> {
        entity::prelude::Alert::find()
            .order_by_desc(entity::alert::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::alert::Model>, DbErr> {
        entity::prelude::Alert::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, record: AlertRecord) -> Result<entity::alert::Model, DbErr> {
        let alert = entity::alert::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(record.title),
            message: ActiveValue::Set(record.message),
            severity: ActiveValue::Set(record.severity.as_str().to_string()),
            country: ActiveValue::Set(record.country),
            active: ActiveValue::Set(record.active),
            created_at: ActiveValue::Set(Utc::now()),
        };

        alert.insert(self.db).await
    }

    /// Overwrites an alert, keeping its creation time
    ///
    /// Returns `Ok(None)` if the alert does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        record: AlertRecord,
    ) -> Result<Option<entity::alert::Model>, DbErr> {
        let Some(alert) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut alert_am = alert.into_active_model();
        alert_am.title = ActiveValue::Set(record.title);
        alert_am.message = ActiveValue::Set(record.message);
        alert_am.severity = ActiveValue::Set(record.severity.as_str().to_string());
        alert_am.country = ActiveValue::Set(record.country);
        alert_am.active = ActiveValue::Set(record.active);

        Ok(Some(alert_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Alert::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod list_active {
        use consularo_test_utils::prelude::*;

        use crate::server::data::content::alert::AlertRepository;

        /// Expect inactive alerts to be excluded regardless of country
        #[tokio::test]
        async fn excludes_inactive_rows() -> Result<(), TestError> {
            let mut test = test_setup_with_content_tables!()?;
            test.content().insert_alert("Global", None, true).await?;
            test.content()
                .insert_alert("Italia", Some("Italia"), true)
                .await?;
            test.content().insert_alert("Vechi", None, false).await?;

            let repo = AlertRepository::new(&test.state.db);
            let rows = repo.list_active().await?;

            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|r| r.active));

            Ok(())
        }
    }

    mod update {
        use consularo_test_utils::prelude::*;

        use crate::{
            model::content::AlertSeverity,
            server::{data::content::alert::AlertRepository, model::content::AlertRecord},
        };

        /// Expect severity stored under its lowercase name and created_at kept
        #[tokio::test]
        async fn updates_severity() -> Result<(), TestError> {
            let mut test = test_setup_with_content_tables!()?;
            let existing = test.content().insert_alert("Grevă", None, true).await?;

            let repo = AlertRepository::new(&test.state.db);
            let updated = repo
                .update(
                    existing.id,
                    AlertRecord {
                        id: Some(existing.id),
                        title: "Grevă generală".to_string(),
                        message: None,
                        severity: AlertSeverity::Critical,
                        country: Some("Italia".to_string()),
                        active: true,
                    },
                )
                .await?
                .unwrap();

            assert_eq!(updated.severity, "critical");
            assert_eq!(updated.created_at, existing.created_at);

            Ok(())
        }
    }
}
