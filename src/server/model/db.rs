//! Database model type aliases.

/// Identity record, one per sign-up or first OAuth sign-in.
pub type AuthUserModel = entity::auth_user::Model;

/// User profile keyed by the identity ID.
///
/// # Fields (from `entity::profile::Model`)
/// - `id` - Identity ID, primary key
/// - `email`, `first_name`, `last_name`, `phone`, `address`, `city`, `county`,
///   `country`, `post_code`, `username`, `avatar_url` - Nullable contact details
/// - `role` - `user`, `admin` or `super_admin`
/// - `updated_at` - Last profile save
pub type ProfileModel = entity::profile::Model;

pub type AnnouncementModel = entity::announcement::Model;

pub type EventModel = entity::event::Model;

/// Alert banner, `country` of `None` targets everyone.
pub type AlertModel = entity::alert::Model;

/// Document submitted for consular review, kept after its owner deletes their account.
pub type UserDocumentModel = entity::user_document::Model;
