//! Fixtures for database rows and mock HTTP endpoints.
//!
//! - `user` - identities and profiles
//! - `content` - announcements, events and alerts
//! - `document` - submitted user documents
//! - `storage` - object storage REST endpoints
//! - `oauth` - OAuth2 token and userinfo endpoints

pub mod content;
pub mod document;
pub mod oauth;
pub mod storage;
pub mod user;
