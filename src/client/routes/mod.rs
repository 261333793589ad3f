pub mod admin;
pub mod auth;
pub mod events;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod send_docs;
pub mod services;
pub mod settings;
pub mod splash;

pub use admin::Admin;
pub use auth::Auth;
pub use events::Events;
pub use faq::Faq;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
pub use send_docs::SendDocs;
pub use services::Services;
pub use settings::Settings;
pub use splash::Splash;
