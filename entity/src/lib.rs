//! SeaORM entities for the ConsulaRO database.

pub mod prelude;

pub mod alert;
pub mod announcement;
pub mod auth_user;
pub mod event;
pub mod profile;
pub mod user_document;
