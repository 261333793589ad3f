use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};

use crate::server::{
    error::{validation::ValidationError, Error},
    model::upload::UploadedFile,
};

/// Multipart body accepted by the upload endpoints, for the OpenAPI document only.
#[allow(dead_code)]
#[derive(utoipa::ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Optional note, only read by the document submission endpoint
    pub message: Option<String>,
}

fn invalid_upload(err: MultipartError) -> ValidationError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ValidationError::UploadTooLarge(err.body_text())
    } else {
        ValidationError::InvalidUpload(err.body_text())
    }
}

/// Reads the `file` part and optional `message` part of a multipart upload
///
/// Unknown parts are skipped.
///
/// # Returns
/// - `Ok((UploadedFile, Option<String>))`: The uploaded file and the message, if sent
/// - `Err(Error::ValidationError(ValidationError::MissingFile))`: No file part, or an empty one
/// - `Err(Error::ValidationError(ValidationError::InvalidUpload))`: Malformed multipart body
/// - `Err(Error::ValidationError(ValidationError::UploadTooLarge))`: Body over the route's limit
pub async fn read_upload(
    mut multipart: Multipart,
) -> Result<(UploadedFile, Option<String>), Error> {
    let mut file = None;
    let mut message = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(invalid_upload)?;

                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("message") => message = Some(field.text().await.map_err(invalid_upload)?),
            _ => {}
        }
    }

    let file = file
        .filter(|file| !file.bytes.is_empty())
        .ok_or(ValidationError::MissingFile)?;

    Ok((file, message))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::{FromRequest, Multipart},
        http::{header::CONTENT_TYPE, Request},
    };

    use super::*;

    const BOUNDARY: &str = "consularo-boundary";

    async fn multipart(body: String) -> Multipart {
        let request = Request::builder()
            .method("POST")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    fn part(name: &str, file_name: Option<&str>, content_type: Option<&str>, value: &str) -> String {
        let mut part = format!("--{}\r\nContent-Disposition: form-data; name=\"{}\"", BOUNDARY, name);
        if let Some(file_name) = file_name {
            part.push_str(&format!("; filename=\"{}\"", file_name));
        }
        part.push_str("\r\n");
        if let Some(content_type) = content_type {
            part.push_str(&format!("Content-Type: {}\r\n", content_type));
        }
        part.push_str(&format!("\r\n{}\r\n", value));
        part
    }

    #[tokio::test]
    async fn reads_file_and_message() {
        let body = format!(
            "{}{}--{}--\r\n",
            part("file", Some("pasaport.pdf"), Some("application/pdf"), "%PDF-1.4"),
            part("message", None, None, "Cerere pașaport"),
            BOUNDARY
        );

        let (file, message) = read_upload(multipart(body).await).await.unwrap();

        assert_eq!(file.file_name, "pasaport.pdf");
        assert_eq!(file.content_type, "application/pdf");
        assert_eq!(file.bytes, b"%PDF-1.4".to_vec());
        assert_eq!(message.as_deref(), Some("Cerere pașaport"));
    }

    #[tokio::test]
    async fn fails_without_file_part() {
        let body = format!(
            "{}--{}--\r\n",
            part("message", None, None, "fără fișier"),
            BOUNDARY
        );

        let result = read_upload(multipart(body).await).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MissingFile))
        ));
    }
}
