//! Error types for the ConsulaRO server.
//!
//! Domain errors live in their own modules (authentication, configuration, validation,
//! object storage) and are aggregated by [`Error`]. Every error implements `IntoResponse`
//! and classifies itself through [`ErrorClass`] so the client receives an `ErrorDto`
//! carrying a kind and a maintenance hint alongside the message.

pub mod auth;
pub mod classify;
pub mod config;
pub mod storage;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

pub use classify::ErrorClass;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{
        auth::AuthError, config::ConfigError, storage::StorageError, validation::ValidationError,
    },
};

/// Main error type for the ConsulaRO server.
///
/// Aggregates the domain-specific error types and external library errors, converting from
/// them via `?`. The `IntoResponse` implementation delegates to the domain error where one
/// exists and answers 500 otherwise.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, credentials, permissions).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Invalid user input (missing title, malformed date, bad upload).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Object storage upload or delete failure.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// No profile row exists for the user after the bootstrap upsert and final read.
    #[error("Failed to resolve profile for user {user_id}: {reason}")]
    ProfileUnresolved { user_id: Uuid, reason: String },
    /// A record addressed by ID does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Outbound HTTP error (OAuth provider userinfo).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::NotFound { entity, id } => {
                tracing::debug!("{} {} not found", entity, id);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new(
                        format!("{} not found", entity),
                        ErrorKind::Validation,
                    )),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting an error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client, keeping the kind
/// and maintenance hint of the wrapped error so the client can still offer remediation.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display + ErrorClass> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                kind: self.0.kind(),
                maintenance_hint: self.0.maintenance_hint(),
            }),
        )
            .into_response()
    }
}
