//! Utility functions for controller request handling.
//!
//! Reusable helpers shared by the controllers: CSRF validation for the OAuth callback,
//! session user lookup for protected endpoints, and multipart upload parsing.

pub mod csrf;
pub mod get_user;
pub mod upload;
