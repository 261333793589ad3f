use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn document<'a>(&'a mut self) -> DocumentFixtures<'a> {
        DocumentFixtures { setup: self }
    }
}

pub struct DocumentFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> DocumentFixtures<'a> {
    pub async fn insert_document(
        &self,
        user_id: Uuid,
        file_name: &str,
    ) -> Result<entity::user_document::Model, TestError> {
        Ok(
            entity::prelude::UserDocument::insert(entity::user_document::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(user_id),
                user_email: ActiveValue::Set(None),
                user_name: ActiveValue::Set(Some("Ion Popescu".to_string())),
                file_name: ActiveValue::Set(file_name.to_string()),
                file_url: ActiveValue::Set(format!(
                    "{}/storage/v1/object/public/documents/{}",
                    self.setup.state.server_url, file_name
                )),
                file_type: ActiveValue::Set("pdf".to_string()),
                message: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
