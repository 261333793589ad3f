//! Session data models.
//!
//! Type-safe wrappers for session data stored with tower-sessions, each submodule owns one
//! piece of session state with methods for inserting, retrieving and removing it.

pub mod auth;
pub mod user;
