use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, UploadedUrlDto},
        user::{ProfileUpdateDto, UserProfileDto},
    },
    server::{
        controller::util::{
            get_user::get_user_id_from_session,
            upload::{read_upload, UploadForm},
        },
        error::Error,
        model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Signed-in user's profile, bootstrapped if missing
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "The user's profile", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let profile = ProfileService::new(&state.db, &state.storage)
        .get_profile(user_id)
        .await?;

    Ok((StatusCode::OK, Json(UserProfileDto::from(profile))))
}

/// Save the signed-in user's profile
///
/// Empty strings are stored as `NULL`. The role cannot be changed here.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = ProfileUpdateDto,
    responses(
        (status = 200, description = "The saved profile", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_profile(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<ProfileUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    let profile = ProfileService::new(&state.db, &state.storage)
        .save_profile(user_id, update)
        .await?;

    Ok((StatusCode::OK, Json(UserProfileDto::from(profile))))
}

/// Upload a new avatar image and return its public URL
///
/// The URL is not saved to the profile, the client does that with the next profile save.
#[utoipa::path(
    post,
    path = "/api/profile/avatar",
    tag = PROFILE_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Public URL of the uploaded avatar", body = UploadedUrlDto),
        (status = 400, description = "Missing file or not an image", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;
    let (file, _) = read_upload(multipart).await?;

    let url = ProfileService::new(&state.db, &state.storage)
        .upload_avatar(user_id, file)
        .await?;

    Ok((StatusCode::OK, Json(UploadedUrlDto { url })))
}

/// Delete the signed-in user's account and sign them out
///
/// Submitted documents and authored content are kept.
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 204, description = "Account deleted and session cleared"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_user_id_from_session(&session).await?;

    ProfileService::new(&state.db, &state.storage)
        .delete_account(user_id)
        .await?;

    session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}
