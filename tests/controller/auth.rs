use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use consularo::{
    model::{
        api::ErrorDto,
        auth::{SignInDto, SignUpDto, SignUpResultDto},
        user::UserProfileDto,
    },
    server::controller::auth::{get_session, logout, oauth_login, sign_in, sign_up},
};
use consularo_test_utils::constant::{TEST_EMAIL, TEST_PASSWORD};
use sea_orm::EntityTrait;

use super::*;
use crate::util::json_body;

fn sign_up_dto() -> SignUpDto {
    SignUpDto {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        first_name: "Ion".to_string(),
        last_name: "Popescu".to_string(),
    }
}

#[tokio::test]
/// Expect a signed-in result and the new user ID in session
async fn sign_up_signs_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = sign_up(
        State(app_state(&test)),
        test.session.clone(),
        Json(sign_up_dto()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: SignUpResultDto = json_body(resp).await;
    let SignUpResultDto::SignedIn { profile } = body else {
        panic!("expected a signed-in result");
    };
    assert_eq!(profile.first_name.as_deref(), Some("Ion"));

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, Some(profile.id));

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the email is already registered
async fn sign_up_conflicts_for_registered_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_auth_user(TEST_EMAIL).await?;

    let result = sign_up(
        State(app_state(&test)),
        test.session.clone(),
        Json(sign_up_dto()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request with a validation kind for a short password
async fn sign_up_rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let mut dto = sign_up_dto();
    dto.password = "12345".to_string();
    let result = sign_up(State(app_state(&test)), test.session.clone(), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, consularo::model::api::ErrorKind::Validation);

    Ok(())
}

#[tokio::test]
/// Expect a registered user to sign in with their password
async fn sign_in_with_registered_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = app_state(&test);

    sign_up(State(state.clone()), test.session.clone(), Json(sign_up_dto()))
        .await
        .unwrap();
    test.session.clear().await;

    let result = sign_in(
        State(state),
        test.session.clone(),
        Json(SignInDto {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let profile: UserProfileDto = json_body(resp).await;
    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, Some(profile.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a wrong password
async fn sign_in_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = app_state(&test);

    sign_up(State(state.clone()), test.session.clone(), Json(sign_up_dto()))
        .await
        .unwrap();
    test.session.clear().await;

    let result = sign_in(
        State(state),
        test.session.clone(),
        Json(SignInDto {
            email: TEST_EMAIL.to_string(),
            password: "wrong-password".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 with the profile for a signed-in user
async fn session_returns_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile(TEST_EMAIL, "user")
        .await?;
    sign_in_as(&test, user.id).await;

    let result = get_session(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let profile: UserProfileDto = json_body(resp).await;
    assert_eq!(profile.id, user.id);

    Ok(())
}

#[tokio::test]
/// Expect the profile to be bootstrapped when the identity has none yet
async fn session_bootstraps_missing_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_auth_user(TEST_EMAIL).await?;
    sign_in_as(&test, user.id).await;

    let result = get_session(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let profile: UserProfileDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(profile.id, user.id);
    assert_eq!(profile.email.as_deref(), Some(TEST_EMAIL));

    let profiles = entity::prelude::Profile::find().all(&test.state.db).await?;
    assert_eq!(profiles.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an anonymous visitor
async fn session_not_found_without_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_session(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 307 redirect to the sign-in view and a cleared session
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    sign_in_as(&test, Uuid::new_v4()).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/auth");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 redirect even when nobody was signed in
async fn logout_without_user_redirects() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::TEMPORARY_REDIRECT
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a provider without configured credentials
async fn oauth_login_rejects_unconfigured_provider() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = oauth_login(
        State(app_state(&test)),
        test.session.clone(),
        Path("google".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an unknown provider
async fn oauth_login_rejects_unknown_provider() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = oauth_login(
        State(app_state(&test)),
        test.session.clone(),
        Path("myspace".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
