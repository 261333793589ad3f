//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a [`TestSetup`], verifying status
//! codes, response bodies and session side effects.

mod admin;
mod auth;
mod content;
mod document;
mod profile;

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, SET_COOKIE},
        Request, StatusCode,
    },
    Router,
};
use consularo::server::model::{app::AppState, session::user::SessionUserId};
use consularo_test_utils::{
    constant::{TEST_EMAIL, TEST_PASSWORD},
    prelude::*,
};
use tower::ServiceExt;
use uuid::Uuid;

/// Store `user_id` in the test session as if the user had signed in
async fn sign_in_as(test: &TestSetup, user_id: Uuid) {
    SessionUserId::insert(&test.session, user_id)
        .await
        .expect("Failed to insert user into session");
}

fn app_state(test: &TestSetup) -> AppState {
    test.state()
}

/// Sign up through `app` and return the session cookie to send with later requests
async fn sign_up_through_router(app: &Router) -> String {
    let body = serde_json::json!({
        "email": TEST_EMAIL,
        "password": TEST_PASSWORD,
        "firstName": "Ion",
        "lastName": "Popescu",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build sign-up request");

    let resp = app
        .clone()
        .oneshot(request)
        .await
        .expect("Sign-up request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    resp.headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .expect("Sign-up did not set a session cookie")
        .to_string()
}
