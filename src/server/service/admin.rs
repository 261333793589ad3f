//! Admin console operations.
//!
//! Every operation first checks that the acting user holds the `admin` or `super_admin`
//! role. Content saves insert when the form carries no ID and update otherwise.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        content::{AlertDto, AlertForm, AnnouncementDto, AnnouncementForm, EventDto, EventForm},
        document::UserDocumentDto,
        user::{Role, UserProfileDto},
    },
    server::{
        data::{
            content::{
                alert::AlertRepository, announcement::AnnouncementRepository,
                event::EventRepository,
            },
            document::UserDocumentRepository,
            profile::ProfileRepository,
        },
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{
            content::{AlertRecord, AnnouncementRecord, EventRecord},
            upload::UploadedFile,
        },
        storage::{object_name, Bucket, StorageClient},
    },
};

/// Remediation script for a database whose schema has drifted from what the server expects.
///
/// Idempotent, safe to run more than once.
pub const MAINTENANCE_SQL: &str = r#"-- ConsulaRO schema repair
CREATE TABLE IF NOT EXISTS auth_users (
  id UUID PRIMARY KEY,
  email TEXT NOT NULL UNIQUE,
  password_hash TEXT,
  provider TEXT NOT NULL DEFAULT 'email',
  provider_subject TEXT,
  metadata JSONB NOT NULL DEFAULT '{}'::jsonb,
  email_confirmed BOOLEAN NOT NULL DEFAULT false,
  confirmation_token TEXT,
  created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
);
CREATE UNIQUE INDEX IF NOT EXISTS "idx-auth_users-provider-provider_subject"
  ON auth_users (provider, provider_subject);

CREATE TABLE IF NOT EXISTS profiles (
  id UUID PRIMARY KEY REFERENCES auth_users(id) ON DELETE CASCADE,
  email TEXT,
  first_name TEXT,
  last_name TEXT,
  phone TEXT,
  address TEXT,
  city TEXT,
  county TEXT,
  country TEXT,
  post_code TEXT,
  username TEXT,
  avatar_url TEXT,
  role TEXT NOT NULL DEFAULT 'user',
  updated_at TIMESTAMP WITH TIME ZONE
);
ALTER TABLE profiles ADD COLUMN IF NOT EXISTS avatar_url TEXT;
ALTER TABLE profiles ADD COLUMN IF NOT EXISTS post_code TEXT;
ALTER TABLE profiles ADD COLUMN IF NOT EXISTS username TEXT;
ALTER TABLE profiles ADD COLUMN IF NOT EXISTS role TEXT NOT NULL DEFAULT 'user';

CREATE TABLE IF NOT EXISTS announcements (
  id UUID PRIMARY KEY,
  title TEXT NOT NULL,
  description TEXT,
  image_url TEXT,
  date DATE,
  end_date DATE,
  active BOOLEAN NOT NULL DEFAULT true
);
ALTER TABLE announcements ADD COLUMN IF NOT EXISTS end_date DATE;
ALTER TABLE announcements ADD COLUMN IF NOT EXISTS image_url TEXT;

CREATE TABLE IF NOT EXISTS events (
  id UUID PRIMARY KEY,
  title TEXT NOT NULL,
  description TEXT,
  location TEXT,
  image_url TEXT,
  date DATE,
  end_date DATE,
  active BOOLEAN NOT NULL DEFAULT true
);
ALTER TABLE events ADD COLUMN IF NOT EXISTS end_date DATE;
ALTER TABLE events ADD COLUMN IF NOT EXISTS location TEXT;

CREATE TABLE IF NOT EXISTS alerts (
  id UUID PRIMARY KEY,
  title TEXT NOT NULL,
  message TEXT,
  type TEXT NOT NULL DEFAULT 'info',
  country TEXT,
  active BOOLEAN NOT NULL DEFAULT true,
  created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS user_documents (
  id UUID PRIMARY KEY,
  user_id UUID NOT NULL,
  user_email TEXT,
  user_name TEXT,
  file_name TEXT NOT NULL,
  file_url TEXT NOT NULL,
  file_type TEXT NOT NULL,
  message TEXT,
  created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
);
ALTER TABLE user_documents DROP CONSTRAINT IF EXISTS user_documents_user_id_fkey;
CREATE INDEX IF NOT EXISTS "idx-user_documents-user_id" ON user_documents (user_id);

-- Older schemas stored dates as text, blank strings become NULL
ALTER TABLE announcements
  ALTER COLUMN date TYPE DATE USING NULLIF(TRIM(date::text), '')::date,
  ALTER COLUMN end_date TYPE DATE USING NULLIF(TRIM(end_date::text), '')::date;
ALTER TABLE events
  ALTER COLUMN date TYPE DATE USING NULLIF(TRIM(date::text), '')::date,
  ALTER COLUMN end_date TYPE DATE USING NULLIF(TRIM(end_date::text), '')::date;
"#;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a StorageClient,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a StorageClient) -> Self {
        Self { db, storage }
    }

    /// Role of the acting user, failing unless it is `admin` or `super_admin`
    pub async fn require_admin(&self, user_id: Uuid) -> Result<Role, Error> {
        let role = ProfileRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|profile| Role::from_db(&profile.role))
            .unwrap_or_default();

        if !role.is_admin() {
            return Err(AuthError::AdminRequired(user_id).into());
        }

        Ok(role)
    }

    pub async fn list_users(&self, acting_user: Uuid) -> Result<Vec<UserProfileDto>, Error> {
        self.require_admin(acting_user).await?;

        let profiles = ProfileRepository::new(self.db).list_all().await?;

        Ok(profiles.into_iter().map(UserProfileDto::from).collect())
    }

    /// Changes the role of a user
    ///
    /// Only a `super_admin` may grant `super_admin` or change the role of a `super_admin`.
    pub async fn update_user_role(
        &self,
        acting_user: Uuid,
        target_user: Uuid,
        role: Role,
    ) -> Result<UserProfileDto, Error> {
        let acting_role = self.require_admin(acting_user).await?;

        let profile_repo = ProfileRepository::new(self.db);
        let target = profile_repo
            .find_by_id(target_user)
            .await?
            .ok_or(Error::NotFound {
                entity: "Profile",
                id: target_user,
            })?;

        let touches_super_admin =
            role == Role::SuperAdmin || Role::from_db(&target.role) == Role::SuperAdmin;
        if touches_super_admin && acting_role != Role::SuperAdmin {
            return Err(AuthError::SuperAdminRequired(acting_user).into());
        }

        let profile = profile_repo
            .update_role(target_user, role)
            .await?
            .ok_or(Error::NotFound {
                entity: "Profile",
                id: target_user,
            })?;

        Ok(UserProfileDto::from(profile))
    }

    pub async fn list_all_announcements(
        &self,
        acting_user: Uuid,
    ) -> Result<Vec<AnnouncementDto>, Error> {
        self.require_admin(acting_user).await?;

        let rows = AnnouncementRepository::new(self.db).list_all().await?;

        Ok(rows.into_iter().map(AnnouncementDto::from).collect())
    }

    pub async fn save_announcement(
        &self,
        acting_user: Uuid,
        form: AnnouncementForm,
    ) -> Result<AnnouncementDto, Error> {
        self.require_admin(acting_user).await?;

        let record = AnnouncementRecord::try_from(form)?;
        let repo = AnnouncementRepository::new(self.db);

        let row = match record.id {
            None => repo.create(record).await?,
            Some(id) => repo.update(id, record).await?.ok_or(Error::NotFound {
                entity: "Announcement",
                id,
            })?,
        };

        Ok(AnnouncementDto::from(row))
    }

    pub async fn delete_announcement(&self, acting_user: Uuid, id: Uuid) -> Result<(), Error> {
        self.require_admin(acting_user).await?;

        let result = AnnouncementRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "Announcement",
                id,
            });
        }

        Ok(())
    }

    pub async fn list_all_events(&self, acting_user: Uuid) -> Result<Vec<EventDto>, Error> {
        self.require_admin(acting_user).await?;

        let rows = EventRepository::new(self.db).list_all().await?;

        Ok(rows.into_iter().map(EventDto::from).collect())
    }

    pub async fn save_event(&self, acting_user: Uuid, form: EventForm) -> Result<EventDto, Error> {
        self.require_admin(acting_user).await?;

        let record = EventRecord::try_from(form)?;
        let repo = EventRepository::new(self.db);

        let row = match record.id {
            None => repo.create(record).await?,
            Some(id) => repo
                .update(id, record)
                .await?
                .ok_or(Error::NotFound { entity: "Event", id })?,
        };

        Ok(EventDto::from(row))
    }

    pub async fn delete_event(&self, acting_user: Uuid, id: Uuid) -> Result<(), Error> {
        self.require_admin(acting_user).await?;

        let result = EventRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound { entity: "Event", id });
        }

        Ok(())
    }

    pub async fn list_all_alerts(&self, acting_user: Uuid) -> Result<Vec<AlertDto>, Error> {
        self.require_admin(acting_user).await?;

        let rows = AlertRepository::new(self.db).list_all().await?;

        Ok(rows.into_iter().map(AlertDto::from).collect())
    }

    pub async fn save_alert(&self, acting_user: Uuid, form: AlertForm) -> Result<AlertDto, Error> {
        self.require_admin(acting_user).await?;

        let record = AlertRecord::try_from(form)?;
        let repo = AlertRepository::new(self.db);

        let row = match record.id {
            None => repo.create(record).await?,
            Some(id) => repo
                .update(id, record)
                .await?
                .ok_or(Error::NotFound { entity: "Alert", id })?,
        };

        Ok(AlertDto::from(row))
    }

    pub async fn delete_alert(&self, acting_user: Uuid, id: Uuid) -> Result<(), Error> {
        self.require_admin(acting_user).await?;

        let result = AlertRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound { entity: "Alert", id });
        }

        Ok(())
    }

    pub async fn list_documents(&self, acting_user: Uuid) -> Result<Vec<UserDocumentDto>, Error> {
        self.require_admin(acting_user).await?;

        let rows = UserDocumentRepository::new(self.db).list_all().await?;

        Ok(rows.into_iter().map(UserDocumentDto::from).collect())
    }

    /// Uploads an image to `content_images` and returns its public URL
    pub async fn upload_content_image(
        &self,
        acting_user: Uuid,
        file: UploadedFile,
    ) -> Result<String, Error> {
        self.require_admin(acting_user).await?;

        if !file.content_type.starts_with("image/") {
            return Err(ValidationError::InvalidUpload(format!(
                "expected an image, got {}",
                file.content_type
            ))
            .into());
        }

        let path = object_name(
            &Uuid::new_v4().simple().to_string(),
            &file.file_name,
            chrono::Utc::now().timestamp_millis(),
        );
        let url = self
            .storage
            .upload(Bucket::ContentImages, &path, &file.content_type, file.bytes)
            .await?;

        Ok(url)
    }

    pub async fn maintenance_sql(&self, acting_user: Uuid) -> Result<String, Error> {
        self.require_admin(acting_user).await?;

        Ok(MAINTENANCE_SQL.to_string())
    }
}

#[cfg(test)]
mod tests;
