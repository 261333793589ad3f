use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::identity::NewIdentity;

pub struct AuthUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthUserRepository<'a, C> {
    /// Creates a new instance of [`AuthUserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new identity, failing if the email is already registered
    pub async fn create(
        &self,
        identity: NewIdentity,
    ) -> Result<entity::auth_user::Model, DbErr> {
        let user = entity::auth_user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(identity.email),
            password_hash: ActiveValue::Set(identity.password_hash),
            provider: ActiveValue::Set(identity.provider),
            provider_subject: ActiveValue::Set(identity.provider_subject),
            metadata: ActiveValue::Set(identity.metadata.to_json()),
            email_confirmed: ActiveValue::Set(identity.email_confirmed),
            confirmation_token: ActiveValue::Set(identity.confirmation_token),
            created_at: ActiveValue::Set(Utc::now()),
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_provider_subject(
        &self,
        provider: &str,
        subject: &str,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Provider.eq(provider))
            .filter(entity::auth_user::Column::ProviderSubject.eq(subject))
            .one(self.db)
            .await
    }

    pub async fn find_by_confirmation_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::ConfirmationToken.eq(token))
            .one(self.db)
            .await
    }

    /// Marks the email confirmed and clears the confirmation token
    ///
    /// Returns `Ok(None)` if the identity does not exist.
    pub async fn confirm_email(
        &self,
        user_id: Uuid,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.email_confirmed = ActiveValue::Set(true);
        user_am.confirmation_token = ActiveValue::Set(None);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Attaches an OAuth provider subject to an existing identity
    ///
    /// The provider has verified the email, so the identity is marked confirmed.
    pub async fn link_provider(
        &self,
        user_id: Uuid,
        provider: &str,
        subject: &str,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.provider = ActiveValue::Set(provider.to_string());
        user_am.provider_subject = ActiveValue::Set(Some(subject.to_string()));
        user_am.email_confirmed = ActiveValue::Set(true);
        user_am.confirmation_token = ActiveValue::Set(None);

        Ok(Some(user_am.update(self.db).await?))
    }

    pub async fn update_metadata(
        &self,
        user_id: Uuid,
        metadata: serde_json::Value,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.metadata = ActiveValue::Set(metadata);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes an identity
    ///
    /// Returns OK regardless of the identity existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
