//! HTTP controller endpoints for the ConsulaRO web API.
//!
//! Axum handlers for authentication, public content, profiles, document submission and
//! administration. Controllers resolve the user from the tower-sessions session, call the
//! services and map results onto JSON responses, and carry utoipa annotations for the
//! OpenAPI document.

pub mod admin;
pub mod auth;
pub mod content;
pub mod document;
pub mod profile;
pub mod util;
