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
pub enum StorageError {
    #[error("Object storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Object storage rejected {operation} of {bucket}/{path} with status {status}: {body}")]
    Rejected {
        operation: &'static str,
        bucket: String,
        path: String,
        status: u16,
        body: String,
    },
}

impl ErrorClass for StorageError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Network
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto::new(
                "File storage is unavailable, please try again.",
                ErrorKind::Network,
            )),
        )
            .into_response()
    }
}
