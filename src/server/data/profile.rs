use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::user::Role,
    server::model::profile::{ProfileChanges, ProfileSeed},
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// All profiles ordered by email, for the admin console
    pub async fn list_all(&self) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Email)
            .all(self.db)
            .await
    }

    /// Inserts a bootstrap profile with role `user`
    ///
    /// On conflict only the email is refreshed, names and avatar written by the
    /// provisioning hook or by the user are kept.
    pub async fn upsert_bootstrap(&self, seed: ProfileSeed) -> Result<(), DbErr> {
        entity::prelude::Profile::insert(seed_active_model(seed))
            .on_conflict(
                OnConflict::column(entity::profile::Column::Id)
                    .update_column(entity::profile::Column::Email)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Inserts the profile for a newly created identity
    ///
    /// On conflict the email is overwritten, names only when the seed carries a non-empty
    /// value. Missing names are stored as empty strings on insert.
    pub async fn upsert_provisioned(&self, seed: ProfileSeed) -> Result<(), DbErr> {
        let mut update_columns = vec![entity::profile::Column::Email];
        if has_text(&seed.first_name) {
            update_columns.push(entity::profile::Column::FirstName);
        }
        if has_text(&seed.last_name) {
            update_columns.push(entity::profile::Column::LastName);
        }

        let seed = ProfileSeed {
            first_name: Some(seed.first_name.unwrap_or_default()),
            last_name: Some(seed.last_name.unwrap_or_default()),
            avatar_url: None,
            ..seed
        };

        entity::prelude::Profile::insert(seed_active_model(seed))
            .on_conflict(
                OnConflict::column(entity::profile::Column::Id)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Upserts the user-editable fields of a profile and returns the stored row
    ///
    /// The role is `user` when the row is created and is never part of the update.
    pub async fn save(
        &self,
        user_id: Uuid,
        email: Option<String>,
        changes: ProfileChanges,
    ) -> Result<entity::profile::Model, DbErr> {
        let profile = entity::profile::ActiveModel {
            id: ActiveValue::Set(user_id),
            email: ActiveValue::Set(email),
            first_name: ActiveValue::Set(changes.first_name),
            last_name: ActiveValue::Set(changes.last_name),
            phone: ActiveValue::Set(changes.phone),
            address: ActiveValue::Set(changes.address),
            city: ActiveValue::Set(changes.city),
            county: ActiveValue::Set(changes.county),
            country: ActiveValue::Set(changes.country),
            post_code: ActiveValue::Set(changes.post_code),
            username: ActiveValue::Set(changes.username),
            avatar_url: ActiveValue::Set(changes.avatar_url),
            role: ActiveValue::Set(Role::User.as_str().to_string()),
            updated_at: ActiveValue::Set(Some(Utc::now())),
        };

        entity::prelude::Profile::insert(profile)
            .on_conflict(
                OnConflict::column(entity::profile::Column::Id)
                    .update_columns([
                        entity::profile::Column::FirstName,
                        entity::profile::Column::LastName,
                        entity::profile::Column::Phone,
                        entity::profile::Column::Address,
                        entity::profile::Column::City,
                        entity::profile::Column::County,
                        entity::profile::Column::Country,
                        entity::profile::Column::PostCode,
                        entity::profile::Column::Username,
                        entity::profile::Column::AvatarUrl,
                        entity::profile::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_id(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("profile {}", user_id)))
    }

    /// Sets the role of a profile
    ///
    /// Returns `Ok(None)` if the profile does not exist.
    pub async fn update_role(
        &self,
        user_id: Uuid,
        role: Role,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();
        profile_am.role = ActiveValue::Set(role.as_str().to_string());
        profile_am.updated_at = ActiveValue::Set(Some(Utc::now()));

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Deletes a profile
    ///
    /// Returns OK regardless of the profile existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Profile::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn seed_active_model(seed: ProfileSeed) -> entity::profile::ActiveModel {
    entity::profile::ActiveModel {
        id: ActiveValue::Set(seed.id),
        email: ActiveValue::Set(seed.email),
        first_name: ActiveValue::Set(seed.first_name),
        last_name: ActiveValue::Set(seed.last_name),
        phone: ActiveValue::Set(None),
        address: ActiveValue::Set(None),
        city: ActiveValue::Set(None),
        county: ActiveValue::Set(None),
        country: ActiveValue::Set(None),
        post_code: ActiveValue::Set(None),
        username: ActiveValue::Set(None),
        avatar_url: ActiveValue::Set(seed.avatar_url),
        role: ActiveValue::Set(Role::User.as_str().to_string()),
        updated_at: ActiveValue::Set(None),
    }
}

#[cfg(test)]
mod tests {
    mod upsert_bootstrap {
        use consularo_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::{data::profile::ProfileRepository, model::profile::ProfileSeed};

        /// Expect a single row with role user after two upserts for the same user
        #[tokio::test]
        async fn never_creates_two_rows() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;

            let repo = ProfileRepository::new(&test.state.db);
            let seed = ProfileSeed {
                id: user.id,
                email: Some(user.email.clone()),
                first_name: Some("Ion".to_string()),
                ..Default::default()
            };
            repo.upsert_bootstrap(seed.clone()).await?;
            repo.upsert_bootstrap(seed).await?;

            let count = entity::prelude::Profile::find().count(&test.state.db).await?;
            assert_eq!(count, 1);
            let profile = repo.find_by_id(user.id).await?.unwrap();
            assert_eq!(profile.role, "user");
            assert_eq!(profile.first_name.as_deref(), Some("Ion"));

            Ok(())
        }

        /// Expect existing names and role to be kept on conflict
        #[tokio::test]
        async fn keeps_existing_fields_on_conflict() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;
            test.user().insert_profile(user.id, "admin").await?;

            let repo = ProfileRepository::new(&test.state.db);
            repo.upsert_bootstrap(ProfileSeed {
                id: user.id,
                email: Some("ion@example.com".to_string()),
                first_name: Some("Other".to_string()),
                ..Default::default()
            })
            .await?;

            let profile = repo.find_by_id(user.id).await?.unwrap();
            assert_eq!(profile.role, "admin");
            assert_eq!(profile.first_name.as_deref(), Some("Ion"));
            assert_eq!(profile.email.as_deref(), Some("ion@example.com"));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo
                .upsert_bootstrap(ProfileSeed {
                    id: uuid::Uuid::new_v4(),
                    ..Default::default()
                })
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod upsert_provisioned {
        use consularo_test_utils::prelude::*;

        use crate::server::{data::profile::ProfileRepository, model::profile::ProfileSeed};

        /// Expect a non-empty name overwritten and a missing one left as stored
        #[tokio::test]
        async fn overwrites_only_present_names() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;
            test.user().insert_profile(user.id, "user").await?;

            let repo = ProfileRepository::new(&test.state.db);
            repo.upsert_provisioned(ProfileSeed {
                id: user.id,
                email: Some("ion@example.com".to_string()),
                first_name: Some("Ioan".to_string()),
                last_name: None,
                avatar_url: None,
            })
            .await?;

            let profile = repo.find_by_id(user.id).await?.unwrap();
            assert_eq!(profile.first_name.as_deref(), Some("Ioan"));
            assert_eq!(profile.last_name.as_deref(), Some("Popescu"));

            Ok(())
        }

        /// Expect blank names on conflict to keep the names already stored
        #[tokio::test]
        async fn keeps_names_when_seed_is_blank() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;
            test.user().insert_profile(user.id, "user").await?;

            let repo = ProfileRepository::new(&test.state.db);
            repo.upsert_provisioned(ProfileSeed {
                id: user.id,
                email: Some("ion.nou@example.com".to_string()),
                first_name: Some(String::new()),
                last_name: Some("  ".to_string()),
                avatar_url: None,
            })
            .await?;

            let profile = repo.find_by_id(user.id).await?.unwrap();
            assert_eq!(profile.email.as_deref(), Some("ion.nou@example.com"));
            assert_eq!(profile.first_name.as_deref(), Some("Ion"));
            assert_eq!(profile.last_name.as_deref(), Some("Popescu"));

            Ok(())
        }

        /// Expect missing names stored as empty strings on insert
        #[tokio::test]
        async fn stores_empty_names_on_insert() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;

            let repo = ProfileRepository::new(&test.state.db);
            repo.upsert_provisioned(ProfileSeed {
                id: user.id,
                email: Some("ion@example.com".to_string()),
                first_name: None,
                last_name: None,
                avatar_url: None,
            })
            .await?;

            let profile = repo.find_by_id(user.id).await?.unwrap();
            assert_eq!(profile.first_name.as_deref(), Some(""));
            assert_eq!(profile.last_name.as_deref(), Some(""));
            assert_eq!(profile.role, "user");

            Ok(())
        }
    }

    mod save {
        use consularo_test_utils::prelude::*;

        use crate::server::{data::profile::ProfileRepository, model::profile::ProfileChanges};

        /// Expect the editable fields written and updated_at set, role unchanged
        #[tokio::test]
        async fn updates_fields_without_role() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;
            test.user().insert_profile(user.id, "admin").await?;

            let repo = ProfileRepository::new(&test.state.db);
            let profile = repo
                .save(
                    user.id,
                    Some(user.email.clone()),
                    ProfileChanges {
                        city: Some("Torino".to_string()),
                        country: Some("Italia".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(profile.role, "admin");
            assert_eq!(profile.city.as_deref(), Some("Torino"));
            assert_eq!(profile.first_name, None);
            assert!(profile.updated_at.is_some());

            Ok(())
        }

        /// Expect a new profile with role user when none exists
        #[tokio::test]
        async fn creates_missing_profile() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_auth_user("ion@example.com").await?;

            let repo = ProfileRepository::new(&test.state.db);
            let profile = repo
                .save(user.id, Some(user.email.clone()), ProfileChanges::default())
                .await?;

            assert_eq!(profile.role, "user");
            assert_eq!(profile.email.as_deref(), Some("ion@example.com"));

            Ok(())
        }
    }

    mod update_role {
        use consularo_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::{model::user::Role, server::data::profile::ProfileRepository};

        /// Expect the stored role to change
        #[tokio::test]
        async fn updates_role() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let (_, profile) = test
                .user()
                .insert_user_with_profile("ion@example.com", "user")
                .await?;

            let repo = ProfileRepository::new(&test.state.db);
            let updated = repo.update_role(profile.id, Role::Admin).await?.unwrap();

            assert_eq!(updated.role, "admin");

            Ok(())
        }

        /// Expect None for an unknown profile
        #[tokio::test]
        async fn returns_none_for_unknown_profile() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let repo = ProfileRepository::new(&test.state.db);
            let result = repo.update_role(Uuid::new_v4(), Role::Admin).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod list_all {
        use consularo_test_utils::prelude::*;

        use crate::server::data::profile::ProfileRepository;

        /// Expect every profile in the table
        #[tokio::test]
        async fn lists_profiles() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            test.user()
                .insert_user_with_profile("b@example.com", "user")
                .await?;
            test.user()
                .insert_user_with_profile("a@example.com", "admin")
                .await?;

            let repo = ProfileRepository::new(&test.state.db);
            let profiles = repo.list_all().await?;

            assert_eq!(profiles.len(), 2);

            Ok(())
        }
    }
}
