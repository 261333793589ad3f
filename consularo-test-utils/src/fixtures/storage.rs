//! Object storage REST mock endpoints.
//!
//! Uploads and deletes are matched by bucket with a path regex, object names carry a
//! millisecond timestamp the test cannot know ahead of time.

use mockito::{Matcher, Mock};

use crate::TestSetup;

impl TestSetup {
    pub fn storage<'a>(&'a mut self) -> StorageFixtures<'a> {
        StorageFixtures { setup: self }
    }
}

pub struct StorageFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> StorageFixtures<'a> {
    fn object_path(bucket: &str) -> Matcher {
        Matcher::Regex(format!(r"^/storage/v1/object/{}/[^/]+$", bucket))
    }

    /// Create a mock upload endpoint for `bucket` which accepts `expected_requests` uploads
    pub fn create_upload_endpoint(&mut self, bucket: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", Self::object_path(bucket))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Key":"uploaded"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock upload endpoint for `bucket` which rejects uploads with `status`
    pub fn create_failing_upload_endpoint(
        &mut self,
        bucket: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", Self::object_path(bucket))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Bucket not found","message":"Bucket not found"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock delete endpoint for `bucket`
    pub fn create_delete_endpoint(&mut self, bucket: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("DELETE", Self::object_path(bucket))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Successfully deleted"}"#)
            .expect(expected_requests)
            .create()
    }
}
