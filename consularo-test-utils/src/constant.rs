//! Placeholder credentials and URLs shared by tests.
//!
//! None of these are real secrets, they only need to line up between the mock
//! servers and the clients configured against them.

/// Service key sent as a bearer token to the mock object storage server.
pub static TEST_STORAGE_SERVICE_KEY: &str = "storage_service_key";

/// OAuth2 client ID used for mock providers.
pub static TEST_OAUTH_CLIENT_ID: &str = "oauth_client_id";

/// OAuth2 client secret used for mock providers.
pub static TEST_OAUTH_CLIENT_SECRET: &str = "oauth_client_secret";

/// Public base URL of the application under test.
pub static TEST_APP_URL: &str = "http://localhost:8080";

/// Password accepted by fixtures that create password identities.
pub static TEST_PASSWORD: &str = "correct-horse";

/// Email used by default user fixtures.
pub static TEST_EMAIL: &str = "ion.popescu@example.com";
