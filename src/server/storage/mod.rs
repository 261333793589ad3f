//! Object storage client.
//!
//! Talks to a REST object store laid out as `{base}/storage/v1/object/{bucket}/{path}`.
//! Every bucket is public, objects are read back through
//! `{base}/storage/v1/object/public/{bucket}/{path}`.

use chrono::Utc;
use dioxus_logger::tracing;
use uuid::Uuid;

use crate::server::error::storage::StorageError;

/// The three public buckets used by the application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    ProfileImages,
    ContentImages,
    Documents,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileImages => "profile_images",
            Self::ContentImages => "content_images",
            Self::Documents => "documents",
        }
    }
}

#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StorageClient {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn object_url(&self, bucket: Bucket, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            bucket.as_str(),
            path
        )
    }

    /// Public URL of an object, no request is made
    pub fn public_url(&self, bucket: Bucket, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            bucket.as_str(),
            path
        )
    }

    /// Upload an object and return its public URL
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the uploaded object
    /// - `Err(StorageError::Rejected)` - The store answered with a non-success status
    /// - `Err(StorageError::Request)` - The store could not be reached
    pub async fn upload(
        &self,
        bucket: Bucket,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let response = self
            .http
            .post(self.object_url(bucket, path))
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(StorageError::Rejected {
                operation: "upload",
                bucket: bucket.as_str().to_string(),
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(bucket = bucket.as_str(), path = %path, "Uploaded object");

        Ok(self.public_url(bucket, path))
    }

    /// Delete an object
    pub async fn remove(&self, bucket: Bucket, path: &str) -> Result<(), StorageError> {
        let response = self
            .http
            .delete(self.object_url(bucket, path))
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(StorageError::Rejected {
                operation: "delete",
                bucket: bucket.as_str().to_string(),
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Object name for an upload: `{owner}-{millis}.{ext}`
///
/// The extension is taken from the original file name, lowercased, and falls back to
/// `bin` when the name has none.
pub fn object_name(owner: &str, file_name: &str, millis: i64) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string());

    format!("{}-{}.{}", owner, millis, ext)
}

/// Object name owned by a user, stamped with the current time
pub fn user_object_name(user_id: Uuid, file_name: &str) -> String {
    object_name(&user_id.to_string(), file_name, Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use consularo_test_utils::prelude::*;
    use mockito::Matcher;
    use uuid::Uuid;

    use super::{object_name, user_object_name, Bucket, StorageClient};
    use crate::server::error::storage::StorageError;

    #[test]
    fn builds_object_names() {
        assert_eq!(object_name("abc", "poza.JPG", 1700000000000), "abc-1700000000000.jpg");
        assert_eq!(object_name("abc", "act.final.pdf", 5), "abc-5.pdf");
        assert_eq!(object_name("abc", "scan", 5), "abc-5.bin");
        assert_eq!(object_name("abc", "scan.", 5), "abc-5.bin");
    }

    #[test]
    fn user_object_name_starts_with_user_id() {
        let user_id = Uuid::new_v4();
        let name = user_object_name(user_id, "avatar.png");

        assert!(name.starts_with(&format!("{}-", user_id)));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn builds_public_url() {
        let client = StorageClient::new("https://storage.example.com/", "key");

        assert_eq!(
            client.public_url(Bucket::Documents, "a-1.pdf"),
            "https://storage.example.com/storage/v1/object/public/documents/a-1.pdf"
        );
    }

    #[tokio::test]
    /// Expect the public URL after a successful upload with the service key as bearer token
    async fn uploads_object() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;
        let mock = test
            .server
            .mock("POST", "/storage/v1/object/profile_images/u-1.png")
            .match_header("authorization", "Bearer service_key")
            .match_header("content-type", "image/png")
            .match_body(Matcher::Exact("png-bytes".to_string()))
            .with_status(200)
            .with_body(r#"{"Key":"profile_images/u-1.png"}"#)
            .create();

        let client = StorageClient::new(test.state.server_url.clone(), "service_key");
        let result = client
            .upload(Bucket::ProfileImages, "u-1.png", "image/png", b"png-bytes".to_vec())
            .await;

        mock.assert();
        assert_eq!(
            result.unwrap(),
            format!(
                "{}/storage/v1/object/public/profile_images/u-1.png",
                test.state.server_url
            )
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect Rejected with the status code when the store refuses the upload
    async fn upload_fails_on_rejection() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;
        let mock = test.storage().create_failing_upload_endpoint("documents", 400, 1);

        let client = StorageClient::new(test.state.server_url.clone(), "service_key");
        let result = client
            .upload(Bucket::Documents, "u-1.pdf", "application/pdf", Vec::new())
            .await;

        mock.assert();
        assert!(matches!(
            result,
            Err(StorageError::Rejected { status: 400, .. })
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect Ok when deleting an object
    async fn removes_object() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_delete_endpoint("documents", 1)
            .build()
            .await?;

        let client = StorageClient::new(test.state.server_url.clone(), "service_key");
        let result = client.remove(Bucket::Documents, "u-1.pdf").await;

        assert!(result.is_ok());
        test.assert_mocks();

        Ok(())
    }
}
