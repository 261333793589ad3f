//! Helpers for driving controllers directly in tests.

use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
};
use serde::de::DeserializeOwned;

const BOUNDARY: &str = "consularo-test-boundary";

/// Deserialize the JSON body of a response
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}

/// Content type and raw body of a multipart form with a `file` part and an optional
/// `message` part
pub fn multipart_body(
    file_name: &str,
    content_type: &str,
    contents: &[u8],
    message: Option<&str>,
) -> (String, Vec<u8>) {
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\nContent-Type: {ct}\r\n\r\n",
        b = BOUNDARY,
        name = file_name,
        ct = content_type,
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(b"\r\n");
    if let Some(message) = message {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"message\"\r\n\r\n{}\r\n",
                BOUNDARY, message
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        body,
    )
}

/// Multipart request with a `file` part and an optional `message` part
pub async fn upload_form(
    file_name: &str,
    content_type: &str,
    contents: &str,
    message: Option<&str>,
) -> Multipart {
    let (multipart_type, body) =
        multipart_body(file_name, content_type, contents.as_bytes(), message);

    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, multipart_type)
        .body(Body::from(body))
        .expect("Failed to build multipart request");

    Multipart::from_request(request, &())
        .await
        .expect("Failed to extract multipart body")
}
