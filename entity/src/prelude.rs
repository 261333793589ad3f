pub use super::alert::Entity as Alert;
pub use super::announcement::Entity as Announcement;
pub use super::auth_user::Entity as AuthUser;
pub use super::event::Entity as Event;
pub use super::profile::Entity as Profile;
pub use super::user_document::Entity as UserDocument;
