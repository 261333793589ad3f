//! Data access layer repositories.
//!
//! One repository per table, each generic over [`sea_orm::ConnectionTrait`] so it can run
//! against a pooled connection or inside a transaction.

pub mod content;
pub mod document;
pub mod identity;
pub mod profile;
