//! Helpers shared across services.

pub mod form;
