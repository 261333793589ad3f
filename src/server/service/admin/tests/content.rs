use uuid::Uuid;

use crate::{
    model::content::{AlertForm, AlertSeverity, AnnouncementForm, EventForm},
    server::{
        data::content::announcement::AnnouncementRepository,
        error::{validation::ValidationError, Error},
        service::content::ContentService,
    },
};

use super::*;

async fn setup_admin() -> Result<(TestSetup, Uuid), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_content_tables()
        .with_table(entity::prelude::UserDocument)
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;

    Ok((test, admin.id))
}

/// Expect a new announcement with a null end date and the active default
#[tokio::test]
async fn inserts_announcement_without_id() -> Result<(), TestError> {
    let (test, admin_id) = setup_admin().await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let saved = admin_service
        .save_announcement(
            admin_id,
            AnnouncementForm {
                title: "Program Consulat Vacanță".to_string(),
                date: Some("2024-12-20".to_string()),
                end_date: Some("".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.end_date, None);
    assert!(saved.active);
    let stored = AnnouncementRepository::new(&state.db)
        .find_by_id(saved.id)
        .await?
        .unwrap();
    assert_eq!(stored.end_date, None);

    Ok(())
}

/// Expect the existing announcement updated in place and hidden from the public list
#[tokio::test]
async fn updates_announcement_with_id() -> Result<(), TestError> {
    let (mut test, admin_id) = setup_admin().await?;
    let existing = test
        .content()
        .insert_announcement("Vechi", None, true)
        .await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let saved = admin_service
        .save_announcement(
            admin_id,
            AnnouncementForm {
                id: Some(existing.id),
                title: "Arhivat".to_string(),
                active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.id, existing.id);
    let public = ContentService::new(&state.db)
        .list_active_announcements()
        .await
        .unwrap();
    assert!(public.is_empty());
    let all = admin_service.list_all_announcements(admin_id).await.unwrap();
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Expect NotFound when updating an announcement that does not exist
#[tokio::test]
async fn fails_to_update_missing_announcement() -> Result<(), TestError> {
    let (test, admin_id) = setup_admin().await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let result = admin_service
        .save_announcement(
            admin_id,
            AnnouncementForm {
                id: Some(Uuid::new_v4()),
                title: "Fantomă".to_string(),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::NotFound { .. })));

    Ok(())
}

/// Expect a validation error for a blank title
#[tokio::test]
async fn rejects_blank_event_title() -> Result<(), TestError> {
    let (test, admin_id) = setup_admin().await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let result = admin_service
        .save_event(admin_id, EventForm::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingField("title")))
    ));

    Ok(())
}

/// Expect an alert saved as global info by default, then deleted
#[tokio::test]
async fn saves_and_deletes_alert() -> Result<(), TestError> {
    let (test, admin_id) = setup_admin().await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let saved = admin_service
        .save_alert(
            admin_id,
            AlertForm {
                title: "Grevă transport".to_string(),
                country: Some("".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.severity, AlertSeverity::Info);
    assert_eq!(saved.country, None);

    admin_service.delete_alert(admin_id, saved.id).await.unwrap();
    let alerts = admin_service.list_all_alerts(admin_id).await.unwrap();
    assert!(alerts.is_empty());

    let again = admin_service.delete_alert(admin_id, saved.id).await;
    assert!(matches!(again, Err(Error::NotFound { .. })));

    Ok(())
}

/// Expect every submitted document, regardless of owner
#[tokio::test]
async fn lists_all_documents() -> Result<(), TestError> {
    let (mut test, admin_id) = setup_admin().await?;
    test.document()
        .insert_document(Uuid::new_v4(), "a.pdf")
        .await?;
    test.document()
        .insert_document(Uuid::new_v4(), "b.pdf")
        .await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let documents = admin_service.list_documents(admin_id).await.unwrap();

    assert_eq!(documents.len(), 2);

    Ok(())
}
