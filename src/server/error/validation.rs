use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::ErrorClass,
};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid date for {field}: {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password should be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Unsupported sign-in provider: {0}")]
    UnsupportedProvider(String),
    #[error("Sign-in with {0} is not configured")]
    ProviderNotConfigured(String),
    #[error("No file was uploaded")]
    MissingFile,
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
    #[error("Upload is too large: {0}")]
    UploadTooLarge(String),
}

impl ErrorClass for ValidationError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto::new(self.to_string(), ErrorKind::Validation)),
        )
            .into_response()
    }
}
