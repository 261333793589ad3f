//! Application state shared through Dioxus context.
//!
//! Each store is created once in [`App`](crate::client::App) and read with
//! `use_context::<Store<_>>()` by the views that need it.

pub mod error;
pub mod settings;
pub mod user;
