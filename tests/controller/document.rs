use axum::{
    body::Body,
    extract::State,
    http::{
        header::{CONTENT_TYPE, COOKIE},
        Request, StatusCode,
    },
    response::IntoResponse,
    Router,
};
use consularo::{
    model::{
        api::{ErrorDto, ErrorKind},
        document::{FileType, UserDocumentDto},
    },
    server::{
        config::DEFAULT_MAX_UPLOAD_BYTES,
        controller::document::{get_documents, submit_document},
        router::routes,
    },
};
use sea_orm::EntityTrait;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::*;
use crate::util::{json_body, multipart_body, upload_form};

/// Full API router with an in-memory session store
fn api_router(test: &TestSetup, max_upload_bytes: usize) -> Router {
    routes(max_upload_bytes)
        .with_state(app_state(test))
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn document_request(cookie: &str, contents: &[u8]) -> Request<Body> {
    let (content_type, body) = multipart_body("buletin.jpg", "image/jpeg", contents, None);

    Request::builder()
        .method("POST")
        .uri("/api/documents")
        .header(CONTENT_TYPE, content_type)
        .header(COOKIE, cookie)
        .body(Body::from(body))
        .expect("Failed to build document request")
}

#[tokio::test]
/// Expect 201 created with the stored document and the submitter's details
async fn submit_document_stores_row() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .with_upload_endpoint("documents", 1)
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    sign_in_as(&test, user.id).await;

    let form = upload_form(
        "buletin.jpg",
        "image/jpeg",
        "JPEGDATA",
        Some("Cerere carte de identitate"),
    )
    .await;
    let result = submit_document(State(app_state(&test)), test.session.clone(), form).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let document: UserDocumentDto = json_body(resp).await;
    assert_eq!(document.user_id, user.id);
    assert_eq!(document.file_name, "buletin.jpg");
    assert_eq!(document.file_type, FileType::Image);
    assert_eq!(document.user_name.as_deref(), Some("Ion Popescu"));
    assert_eq!(document.message.as_deref(), Some("Cerere carte de identitate"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed upload to surface as an error without writing a row
async fn submit_document_fails_when_storage_rejects() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .with_mock_endpoint(|server| {
            server
                .mock(
                    "POST",
                    mockito::Matcher::Regex(r"^/storage/v1/object/documents/[^/]+$".to_string()),
                )
                .with_status(400)
                .with_body(r#"{"error":"Bucket not found","message":"Bucket not found"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    sign_in_as(&test, user.id).await;

    let form = upload_form("cerere.pdf", "application/pdf", "%PDF-1.4", None).await;
    let result = submit_document(State(app_state(&test)), test.session.clone(), form).await;

    assert!(result.is_err());
    let documents = get_documents(State(app_state(&test)), test.session.clone())
        .await
        .unwrap()
        .into_response();
    let documents: Vec<UserDocumentDto> = json_body(documents).await;
    assert!(documents.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect only the signed-in user's documents
async fn get_documents_lists_own_documents() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .build()
        .await?;
    let (user, _) = test
        .user()
        .insert_user_with_profile("ion@example.com", "user")
        .await?;
    let (other, _) = test
        .user()
        .insert_user_with_profile("maria@example.com", "user")
        .await?;
    test.document().insert_document(user.id, "pasaport.pdf").await?;
    test.document().insert_document(other.id, "procura.pdf").await?;
    sign_in_as(&test, user.id).await;

    let result = get_documents(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let documents: Vec<UserDocumentDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].file_name, "pasaport.pdf");

    Ok(())
}

#[tokio::test]
/// Expect a phone photo larger than axum's 2 MB default to be accepted by the router
async fn router_accepts_photo_over_default_body_limit() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .with_upload_endpoint("documents", 1)
        .build()
        .await?;
    let app = api_router(&test, DEFAULT_MAX_UPLOAD_BYTES);
    let cookie = sign_up_through_router(&app).await;

    let photo = vec![b'J'; 3 * 1024 * 1024];
    let resp = app
        .clone()
        .oneshot(document_request(&cookie, &photo))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let document: UserDocumentDto = json_body(resp).await;
    assert_eq!(document.file_name, "buletin.jpg");
    assert_eq!(document.file_type, FileType::Image);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 413 with a validation error when the upload exceeds the configured limit
async fn router_rejects_upload_over_configured_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(entity::prelude::UserDocument)
        .build()
        .await?;
    let app = api_router(&test, 1024);
    let cookie = sign_up_through_router(&app).await;

    let photo = vec![b'J'; 4096];
    let resp = app
        .clone()
        .oneshot(document_request(&cookie, &photo))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.kind, ErrorKind::Validation);

    let documents = entity::prelude::UserDocument::find()
        .all(&test.state.db)
        .await?;
    assert!(documents.is_empty());

    Ok(())
}
