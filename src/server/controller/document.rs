use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, document::UserDocumentDto},
    server::{
        controller::util::{
            get_user::get_user_id_from_session,
            upload::{read_upload, UploadForm},
        },
        error::Error,
        model::app::AppState,
        service::document::DocumentService,
    },
};

pub static DOCUMENT_TAG: &str = "document";

/// Documents submitted by the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "The user's documents", body = Vec<UserDocumentDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let documents = DocumentService::new(&state.db, &state.storage)
        .list_my_documents(user_id)
        .await?;

    Ok((StatusCode::OK, Json(documents)))
}

/// Submit a document to the consulate
///
/// Images are recorded as `image`, everything else as `pdf`.
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Document stored", body = UserDocumentDto),
        (status = 400, description = "Missing file", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_document(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;
    let (file, message) = read_upload(multipart).await?;

    let document = DocumentService::new(&state.db, &state.storage)
        .submit_document(user_id, file, message)
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}
