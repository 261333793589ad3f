use crate::server::{
    error::{auth::AuthError, Error},
    model::upload::UploadedFile,
    service::admin::MAINTENANCE_SQL,
};

use super::*;

fn image() -> UploadedFile {
    UploadedFile {
        file_name: "afis.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff],
    }
}

/// Expect the public URL in the content_images bucket
#[tokio::test]
async fn uploads_content_image() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_upload_endpoint("content_images", 1)
        .build()
        .await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "super_admin")
        .await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let url = admin_service
        .upload_content_image(admin.id, image())
        .await
        .unwrap();

    assert!(url.starts_with(&format!(
        "{}/storage/v1/object/public/content_images/",
        test.state.server_url
    )));
    assert!(url.ends_with(".jpg"));
    test.assert_mocks();

    Ok(())
}

/// Expect no upload for a regular user
#[tokio::test]
async fn rejects_regular_user_upload() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let result = admin_service.upload_content_image(user.id, image()).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AdminRequired(_)))
    ));

    Ok(())
}

/// Expect the remediation script for administrators only
#[tokio::test]
async fn returns_maintenance_sql_to_admins() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (admin, _) = test
        .user()
        .insert_user_with_profile("admin@example.com", "admin")
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    let state: AppState = test.state();

    let admin_service = AdminService::new(&state.db, &state.storage);
    let sql = admin_service.maintenance_sql(admin.id).await.unwrap();
    assert_eq!(sql, MAINTENANCE_SQL);
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS profiles"));
    assert!(sql.contains("ALTER COLUMN end_date TYPE DATE USING NULLIF(TRIM(end_date::text), '')::date"));
    assert!(!sql.contains("WHERE end_date::text = ''"));

    let denied = admin_service.maintenance_sql(user.id).await;
    assert!(denied.is_err());

    Ok(())
}
