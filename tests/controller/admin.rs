use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use consularo::{
    model::{
        api::{MaintenanceSqlDto, UploadedUrlDto},
        content::{AlertDto, AlertForm, AlertSeverity, AnnouncementDto, AnnouncementForm},
        document::UserDocumentDto,
        user::{Role, UpdateRoleDto, UserProfileDto},
    },
    server::controller::admin::{
        delete_announcement, get_announcements, get_documents, get_maintenance_sql, get_users,
        save_alert, save_announcement, update_user_role, upload_image,
    },
};

use super::*;
use crate::util::{json_body, upload_form};

#[tokio::test]
/// Expect 403 forbidden for a regular user
async fn regular_user_is_forbidden() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    sign_in_as(&test, user.id).await;

    let result = get_users(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an anonymous visitor
async fn anonymous_visitor_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_users(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect an admin to list every profile
async fn admin_lists_users() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_user("maria@example.com", "user")
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = get_users(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let users: Vec<UserProfileDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(users.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when an admin tries to grant super_admin
async fn admin_cannot_grant_super_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = update_user_role(
        State(app_state(&test)),
        test.session.clone(),
        Path(user.id),
        Json(UpdateRoleDto {
            role: Role::SuperAdmin,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect a super admin to grant super_admin
async fn super_admin_grants_super_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (super_admin, _) = test
        .user()
        .insert_user_with_profile("root@example.com", "super_admin")
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    sign_in_as(&test, super_admin.id).await;

    let result = update_user_role(
        State(app_state(&test)),
        test.session.clone(),
        Path(user.id),
        Json(UpdateRoleDto {
            role: Role::SuperAdmin,
        }),
    )
    .await;

    assert!(result.is_ok());
    let updated: UserProfileDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(updated.role, Role::SuperAdmin);

    Ok(())
}

#[tokio::test]
/// Expect a new announcement with null dates for empty date strings and active by default
async fn save_announcement_normalizes_form() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    sign_in_as(&test, admin.id).await;

    let form = AnnouncementForm {
        title: "Program Consulat Vacanță".to_string(),
        date: Some("2024-12-20".to_string()),
        end_date: Some("".to_string()),
        ..Default::default()
    };
    let result = save_announcement(State(app_state(&test)), test.session.clone(), Json(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let saved: AnnouncementDto = json_body(resp).await;
    assert_eq!(saved.date, NaiveDate::from_ymd_opt(2024, 12, 20));
    assert_eq!(saved.end_date, None);
    assert_eq!(saved.description, "");
    assert!(saved.active);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a blank title
async fn save_announcement_requires_title() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    sign_in_as(&test, admin.id).await;

    let form = AnnouncementForm {
        title: "   ".to_string(),
        ..Default::default()
    };
    let result = save_announcement(State(app_state(&test)), test.session.clone(), Json(form)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content and the announcement gone from the admin list
async fn delete_announcement_removes_row() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    let announcement = test
        .content()
        .insert_announcement("De șters", None, false)
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = delete_announcement(
        State(app_state(&test)),
        test.session.clone(),
        Path(announcement.id),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let remaining = get_announcements(State(app_state(&test)), test.session.clone())
        .await
        .unwrap()
        .into_response();
    let remaining: Vec<AnnouncementDto> = json_body(remaining).await;
    assert!(remaining.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect a blank alert country stored as null and the severity kept
async fn save_alert_stores_global_alert() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    sign_in_as(&test, admin.id).await;

    let form = AlertForm {
        title: "Cod roșu de caniculă".to_string(),
        severity: Some(AlertSeverity::Critical),
        country: Some(" ".to_string()),
        ..Default::default()
    };
    let result = save_alert(State(app_state(&test)), test.session.clone(), Json(form)).await;

    assert!(result.is_ok());
    let saved: AlertDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(saved.severity, AlertSeverity::Critical);
    assert_eq!(saved.country, None);
    assert!(saved.active);

    Ok(())
}

#[tokio::test]
/// Expect documents from every user
async fn admin_lists_all_documents() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    test.document().insert_document(Uuid::new_v4(), "pasaport.pdf").await?;
    test.document().insert_document(Uuid::new_v4(), "procura.pdf").await?;
    sign_in_as(&test, admin.id).await;

    let result = get_documents(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let documents: Vec<UserDocumentDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(documents.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect the public URL of an uploaded content image
async fn upload_image_returns_url() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_upload_endpoint("content_images", 1)
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    sign_in_as(&test, admin.id).await;

    let form = upload_form("afis.webp", "image/webp", "WEBPDATA", None).await;
    let result = upload_image(State(app_state(&test)), test.session.clone(), form).await;

    assert!(result.is_ok());
    let uploaded: UploadedUrlDto = json_body(result.unwrap().into_response()).await;
    assert!(uploaded
        .url
        .contains("/storage/v1/object/public/content_images/"));
    assert!(uploaded.url.ends_with(".webp"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the maintenance script for an administrator
async fn admin_gets_maintenance_sql() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "super_admin")
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = get_maintenance_sql(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let dto: MaintenanceSqlDto = json_body(result.unwrap().into_response()).await;
    assert!(dto.sql.contains("CREATE TABLE IF NOT EXISTS user_documents"));

    Ok(())
}
