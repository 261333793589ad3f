//! Server-side models: application state, session wrappers, database aliases and the
//! conversions between database rows and wire DTOs.

pub mod app;
pub mod content;
pub mod db;
pub mod document;
pub mod identity;
pub mod profile;
pub mod session;
pub mod upload;
