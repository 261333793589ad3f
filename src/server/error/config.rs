use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::{model::api::ErrorKind, server::error::{ErrorClass, InternalServerError}};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl ErrorClass for ConfigError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Unknown
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
