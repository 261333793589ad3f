//! Repositories for admin-managed content.
//!
//! Public listings only ever return `active = true` rows, the `list_all` variants back the
//! admin console and include inactive rows.

pub mod alert;
pub mod announcement;
pub mod event;
