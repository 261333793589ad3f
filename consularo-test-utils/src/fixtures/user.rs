use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::json;
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a confirmed email identity with first and last name metadata
    pub async fn insert_auth_user(
        &self,
        email: &str,
    ) -> Result<entity::auth_user::Model, TestError> {
        self.insert_auth_user_with_metadata(
            email,
            json!({ "first_name": "Ion", "last_name": "Popescu" }),
        )
        .await
    }

    /// Insert a confirmed identity carrying arbitrary sign-up metadata
    pub async fn insert_auth_user_with_metadata(
        &self,
        email: &str,
        metadata: serde_json::Value,
    ) -> Result<entity::auth_user::Model, TestError> {
        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(None),
                provider: ActiveValue::Set("email".to_string()),
                provider_subject: ActiveValue::Set(None),
                metadata: ActiveValue::Set(metadata),
                email_confirmed: ActiveValue::Set(true),
                confirmation_token: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a profile row for an existing identity
    pub async fn insert_profile(
        &self,
        user_id: Uuid,
        role: &str,
    ) -> Result<entity::profile::Model, TestError> {
        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                id: ActiveValue::Set(user_id),
                email: ActiveValue::Set(None),
                first_name: ActiveValue::Set(Some("Ion".to_string())),
                last_name: ActiveValue::Set(Some("Popescu".to_string())),
                phone: ActiveValue::Set(None),
                address: ActiveValue::Set(None),
                city: ActiveValue::Set(None),
                county: ActiveValue::Set(None),
                country: ActiveValue::Set(None),
                post_code: ActiveValue::Set(None),
                username: ActiveValue::Set(None),
                avatar_url: ActiveValue::Set(None),
                role: ActiveValue::Set(role.to_string()),
                updated_at: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert an identity together with its profile
    pub async fn insert_user_with_profile(
        &self,
        email: &str,
        role: &str,
    ) -> Result<(entity::auth_user::Model, entity::profile::Model), TestError> {
        let auth_user = self.insert_auth_user(email).await?;
        let profile = self.insert_profile(auth_user.id, role).await?;

        Ok((auth_user, profile))
    }
}
