use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use consularo::{
    model::{
        api::UploadedUrlDto,
        user::{ProfileUpdateDto, Role, UserProfileDto},
    },
    server::controller::profile::{delete_account, get_profile, save_profile, upload_avatar},
};
use sea_orm::EntityTrait;

use super::*;
use crate::util::{json_body, upload_form};

#[tokio::test]
/// Expect 404 not found without a user in session
async fn get_profile_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_profile(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect blank fields stored as null and the role left untouched
async fn save_profile_normalizes_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "admin")
        .await?;
    sign_in_as(&test, user.id).await;

    let update = ProfileUpdateDto {
        first_name: Some("Maria".to_string()),
        last_name: Some("Ionescu".to_string()),
        phone: Some("".to_string()),
        city: Some("Madrid".to_string()),
        country: Some("Spania".to_string()),
        ..Default::default()
    };
    let result = save_profile(State(app_state(&test)), test.session.clone(), Json(update)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let profile: UserProfileDto = json_body(resp).await;
    assert_eq!(profile.first_name.as_deref(), Some("Maria"));
    assert_eq!(profile.country.as_deref(), Some("Spania"));
    assert_eq!(profile.phone, None);
    assert_eq!(profile.role, Role::Admin);
    assert!(profile.updated_at.is_some());

    Ok(())
}

#[tokio::test]
/// Expect the avatar URL of the uploaded image
async fn upload_avatar_returns_url() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_upload_endpoint("profile_images", 1)
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    sign_in_as(&test, user.id).await;

    let form = upload_form("avatar.png", "image/png", "PNGDATA", None).await;
    let result = upload_avatar(State(app_state(&test)), test.session.clone(), form).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let uploaded: UploadedUrlDto = json_body(resp).await;
    assert!(uploaded
        .url
        .contains(&format!("/storage/v1/object/public/profile_images/{}-", user.id)));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 204 no content, the profile and identity removed and the session cleared
async fn delete_account_removes_user_and_keeps_documents() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    test.document().insert_document(user.id, "pasaport.pdf").await?;
    sign_in_as(&test, user.id).await;

    let result = delete_account(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let profile = entity::prelude::Profile::find_by_id(user.id)
        .one(&test.state.db)
        .await?;
    assert!(profile.is_none());
    let identity = entity::prelude::AuthUser::find_by_id(user.id)
        .one(&test.state.db)
        .await?;
    assert!(identity.is_none());
    let documents = entity::prelude::UserDocument::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(documents.len(), 1);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
