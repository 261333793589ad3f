//! Service layer for business logic.
//!
//! Services coordinate repositories, object storage and OAuth providers: authentication and
//! the profile bootstrap, public content listings, document submission, profile management
//! and the admin console.

pub mod admin;
pub mod auth;
pub mod content;
pub mod document;
pub mod profile;
