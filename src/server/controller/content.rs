use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        content::{AlertDto, AnnouncementDto, EventDto},
    },
    server::{
        controller::util::get_user::maybe_profile_from_session, error::Error,
        model::app::AppState, service::content::ContentService,
    },
};

pub static CONTENT_TAG: &str = "content";

/// Active announcements, newest first
#[utoipa::path(
    get,
    path = "/api/content/announcements",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active announcements", body = Vec<AnnouncementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let announcements = ContentService::new(&state.db)
        .list_active_announcements()
        .await?;

    Ok((StatusCode::OK, Json(announcements)))
}

/// Active events, newest first
#[utoipa::path(
    get,
    path = "/api/content/events",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let events = ContentService::new(&state.db).list_active_events().await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Active alerts for the viewer
///
/// Signed-in users see global alerts plus the alerts targeted at their profile's country,
/// anonymous visitors see global alerts only.
#[utoipa::path(
    get,
    path = "/api/content/alerts",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Alerts visible to the viewer", body = Vec<AlertDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer_country = maybe_profile_from_session(&state, &session)
        .await?
        .and_then(|profile| profile.country);

    let alerts = ContentService::new(&state.db)
        .list_visible_alerts(viewer_country.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(alerts)))
}
