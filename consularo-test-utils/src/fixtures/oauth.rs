//! OAuth2 provider mock endpoints.
//!
//! The token endpoint answers any authorization code with a bearer token, the userinfo
//! endpoint answers with the profile supplied by the test.

use mockito::Mock;
use serde_json::json;

use crate::TestSetup;

pub static MOCK_TOKEN_PATH: &str = "/oauth/token";
pub static MOCK_AUTHORIZE_PATH: &str = "/oauth/authorize";
pub static MOCK_USERINFO_PATH: &str = "/oauth/userinfo";

impl TestSetup {
    pub fn oauth<'a>(&'a mut self) -> OAuthFixtures<'a> {
        OAuthFixtures { setup: self }
    }
}

pub struct OAuthFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> OAuthFixtures<'a> {
    /// Create the token exchange and userinfo endpoints for a provider account
    ///
    /// # Arguments
    /// - `subject` - Provider account ID returned by the userinfo endpoint
    /// - `email` - Email returned by the userinfo endpoint
    /// - `name` - Display name returned by the userinfo endpoint
    pub fn create_provider_endpoints(
        &mut self,
        subject: &str,
        email: &str,
        name: &str,
    ) -> Vec<Mock> {
        let token = self
            .setup
            .server
            .mock("POST", MOCK_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "access_token": "mock_access_token",
                    "token_type": "bearer",
                    "expires_in": 3600
                })
                .to_string(),
            )
            .expect(1)
            .create();

        let userinfo = self
            .setup
            .server
            .mock("GET", MOCK_USERINFO_PATH)
            .match_header("authorization", "Bearer mock_access_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": subject,
                    "email": email,
                    "name": name,
                    "picture": "https://example.com/avatar.png"
                })
                .to_string(),
            )
            .expect(1)
            .create();

        vec![token, userinfo]
    }

    /// Create a token endpoint which rejects the authorization code
    pub fn create_rejecting_token_endpoint(&mut self) -> Mock {
        self.setup
            .server
            .mock("POST", MOCK_TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"invalid_grant"}"#)
            .expect(1)
            .create()
    }
}
