use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use consularo::{
    model::content::{AlertDto, AnnouncementDto, EventDto},
    server::controller::content::{get_alerts, get_announcements, get_events},
};
use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect only active announcements, newest date first
async fn announcements_exclude_inactive() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;
    test.content()
        .insert_announcement("Program de vară", NaiveDate::from_ymd_opt(2025, 6, 1), true)
        .await?;
    test.content()
        .insert_announcement("Program de iarnă", NaiveDate::from_ymd_opt(2025, 12, 1), true)
        .await?;
    test.content()
        .insert_announcement("Ascuns", NaiveDate::from_ymd_opt(2026, 1, 1), false)
        .await?;

    let result = get_announcements(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let announcements: Vec<AnnouncementDto> = json_body(resp).await;
    let titles: Vec<&str> = announcements.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Program de iarnă", "Program de vară"]);

    Ok(())
}

#[tokio::test]
/// Expect only active events
async fn events_exclude_inactive() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;
    test.content()
        .insert_event("Ziua Națională", NaiveDate::from_ymd_opt(2025, 12, 1), true)
        .await?;
    test.content()
        .insert_event("Anulat", NaiveDate::from_ymd_opt(2025, 11, 1), false)
        .await?;

    let result = get_events(State(app_state(&test))).await;

    assert!(result.is_ok());
    let events: Vec<EventDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(events.len(), 1);
    assert!(events.iter().all(|event| event.active));

    Ok(())
}

#[tokio::test]
/// Expect an anonymous visitor to only see global alerts
async fn anonymous_sees_global_alerts() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .build()
        .await?;
    test.content().insert_alert("Global", None, true).await?;
    test.content().insert_alert("Italia", Some("Italia"), true).await?;

    let result = get_alerts(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let alerts: Vec<AlertDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "Global");

    Ok(())
}

#[tokio::test]
/// Expect a signed-in viewer to also see alerts targeting their country
async fn viewer_sees_alerts_for_their_country() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .build()
        .await?;
    let (user, profile) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    let mut profile: entity::profile::ActiveModel = profile.into();
    profile.country = ActiveValue::Set(Some("Italia, Torino".to_string()));
    profile.update(&test.state.db).await?;

    test.content().insert_alert("Global", None, true).await?;
    test.content().insert_alert("Italia", Some("italia"), true).await?;
    test.content().insert_alert("Spania", Some("Spania"), true).await?;
    test.content().insert_alert("Inactiv", None, false).await?;
    sign_in_as(&test, user.id).await;

    let result = get_alerts(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let alerts: Vec<AlertDto> = json_body(result.unwrap().into_response()).await;
    let mut titles: Vec<&str> = alerts.iter().map(|a| a.title.as_str()).collect();
    titles.sort();
    assert_eq!(titles, vec!["Global", "Italia"]);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error with a maintenance hint when the tables are missing
async fn missing_tables_hint_at_maintenance() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = get_announcements(State(app_state(&test))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: consularo::model::api::ErrorDto = json_body(resp).await;
    assert!(body.maintenance_hint);

    Ok(())
}
