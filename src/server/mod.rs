//! Server application core modules.
//!
//! Everything the ConsulaRO backend owns: HTTP routing and controllers, identity and
//! sessions, the profile bootstrap, content and document services, database access through
//! sea-orm, and the REST object storage client.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
