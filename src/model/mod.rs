//! Wire types shared by the client and the server.
//!
//! Field names are camelCase on the wire, database columns are snake_case.

pub mod api;
pub mod auth;
pub mod content;
pub mod document;
pub mod user;
