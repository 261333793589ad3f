//! Administrator endpoints.
//!
//! Every handler resolves the acting user from the session and lets [`AdminService`] check
//! their role, so a regular user receives 403 and an anonymous visitor 404.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MaintenanceSqlDto, UploadedUrlDto},
        content::{AlertDto, AlertForm, AnnouncementDto, AnnouncementForm, EventDto, EventForm},
        document::UserDocumentDto,
        user::{UpdateRoleDto, UserProfileDto},
    },
    server::{
        controller::util::{
            get_user::get_user_id_from_session,
            upload::{read_upload, UploadForm},
        },
        error::Error,
        model::app::AppState,
        service::admin::AdminService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// All user profiles, ordered by email
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All profiles", body = Vec<UserProfileDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let users = AdminService::new(&state.db, &state.storage)
        .list_users(acting_user)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Change the role of a user
///
/// Granting or revoking `super_admin` requires the acting user to be a `super_admin`.
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/role",
    tag = ADMIN_TAG,
    params(("user_id" = Uuid, Path, description = "ID of the user whose role changes")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "The updated profile", body = UserProfileDto),
        (status = 403, description = "Not allowed to assign this role", body = ErrorDto),
        (status = 404, description = "User or profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<Uuid>,
    Json(update): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let profile = AdminService::new(&state.db, &state.storage)
        .update_user_role(acting_user, user_id, update.role)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// All announcements including inactive ones
#[utoipa::path(
    get,
    path = "/api/admin/announcements",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All announcements", body = Vec<AnnouncementDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let announcements = AdminService::new(&state.db, &state.storage)
        .list_all_announcements(acting_user)
        .await?;

    Ok((StatusCode::OK, Json(announcements)))
}

/// Create an announcement, or update it when the form carries an ID
#[utoipa::path(
    post,
    path = "/api/admin/announcements",
    tag = ADMIN_TAG,
    request_body = AnnouncementForm,
    responses(
        (status = 200, description = "The saved announcement", body = AnnouncementDto),
        (status = 400, description = "Missing title or malformed date", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_announcement(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<AnnouncementForm>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let announcement = AdminService::new(&state.db, &state.storage)
        .save_announcement(acting_user, form)
        .await?;

    Ok((StatusCode::OK, Json(announcement)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/announcements/{id}",
    tag = ADMIN_TAG,
    params(("id" = Uuid, Path, description = "Announcement ID")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    AdminService::new(&state.db, &state.storage)
        .delete_announcement(acting_user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// All events including inactive ones
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let events = AdminService::new(&state.db, &state.storage)
        .list_all_events(acting_user)
        .await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Create an event, or update it when the form carries an ID
#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    request_body = EventForm,
    responses(
        (status = 200, description = "The saved event", body = EventDto),
        (status = 400, description = "Missing title or malformed date", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_event(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<EventForm>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let event = AdminService::new(&state.db, &state.storage)
        .save_event(acting_user, form)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    tag = ADMIN_TAG,
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    AdminService::new(&state.db, &state.storage)
        .delete_event(acting_user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// All alerts including inactive ones, newest first
#[utoipa::path(
    get,
    path = "/api/admin/alerts",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All alerts", body = Vec<AlertDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let alerts = AdminService::new(&state.db, &state.storage)
        .list_all_alerts(acting_user)
        .await?;

    Ok((StatusCode::OK, Json(alerts)))
}

/// Create an alert, or update it when the form carries an ID
#[utoipa::path(
    post,
    path = "/api/admin/alerts",
    tag = ADMIN_TAG,
    request_body = AlertForm,
    responses(
        (status = 200, description = "The saved alert", body = AlertDto),
        (status = 400, description = "Missing title", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_alert(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<AlertForm>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let alert = AdminService::new(&state.db, &state.storage)
        .save_alert(acting_user, form)
        .await?;

    Ok((StatusCode::OK, Json(alert)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/alerts/{id}",
    tag = ADMIN_TAG,
    params(("id" = Uuid, Path, description = "Alert ID")),
    responses(
        (status = 204, description = "Alert deleted"),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_alert(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    AdminService::new(&state.db, &state.storage)
        .delete_alert(acting_user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Documents submitted by all users, newest first
#[utoipa::path(
    get,
    path = "/api/admin/documents",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All submitted documents", body = Vec<UserDocumentDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let documents = AdminService::new(&state.db, &state.storage)
        .list_documents(acting_user)
        .await?;

    Ok((StatusCode::OK, Json(documents)))
}

/// Upload an image for an announcement or event and return its public URL
#[utoipa::path(
    post,
    path = "/api/admin/images",
    tag = ADMIN_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Public URL of the uploaded image", body = UploadedUrlDto),
        (status = 400, description = "Missing file or not an image", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;
    let (file, _) = read_upload(multipart).await?;

    let url = AdminService::new(&state.db, &state.storage)
        .upload_content_image(acting_user, file)
        .await?;

    Ok((StatusCode::OK, Json(UploadedUrlDto { url })))
}

/// Database remediation script for a schema that drifted from the application
#[utoipa::path(
    get,
    path = "/api/admin/maintenance-sql",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "The remediation script", body = MaintenanceSqlDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_sql(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let acting_user = get_user_id_from_session(&session).await?;

    let sql = AdminService::new(&state.db, &state.storage)
        .maintenance_sql(acting_user)
        .await?;

    Ok((StatusCode::OK, Json(MaintenanceSqlDto { sql })))
}
