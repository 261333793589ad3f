use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{ErrorClass, InternalServerError},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0} not found in database despite having an active session")]
    UserNotInDatabase(Uuid),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("User already registered")]
    UserAlreadyRegistered,
    #[error("Email confirmation token is invalid or was already used")]
    InvalidConfirmationToken,
    #[error("User {0} attempted an administrator action without an administrator role")]
    AdminRequired(Uuid),
    #[error("User {0} attempted to grant or revoke super_admin without being a super_admin")]
    SuperAdminRequired(Uuid),
    #[error("OAuth code exchange failed: {0}")]
    OAuthExchangeFailed(String),
}

impl AuthError {
    fn respond(status: StatusCode, message: &str) -> Response {
        (status, Json(ErrorDto::new(message, ErrorKind::Auth))).into_response()
    }
}

impl ErrorClass for AuthError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Auth
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::NOT_FOUND, "User not found")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::respond(StatusCode::NOT_FOUND, "User not found")
            }
            Self::CsrfValidationFailed | Self::OAuthExchangeFailed(_) => {
                tracing::debug!("{}", self);

                Self::respond(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::UNAUTHORIZED, "Invalid login credentials")
            }
            Self::EmailNotConfirmed => {
                Self::respond(StatusCode::FORBIDDEN, "Email not confirmed")
            }
            Self::UserAlreadyRegistered => {
                Self::respond(StatusCode::CONFLICT, "User already registered")
            }
            Self::InvalidConfirmationToken => Self::respond(
                StatusCode::BAD_REQUEST,
                "This confirmation link is invalid or has already been used.",
            ),
            Self::AdminRequired(user_id) | Self::SuperAdminRequired(user_id) => {
                tracing::warn!(user_id = %user_id, "{}", self);

                Self::respond(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
        }
    }
}
