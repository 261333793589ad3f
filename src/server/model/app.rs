use sea_orm::DatabaseConnection;

use crate::server::{service::auth::oauth::OAuthProviders, storage::StorageClient};

/// Identity settings read from configuration at startup.
#[derive(Clone, Debug)]
pub struct AuthSettings {
    /// Public base URL used for OAuth redirects and confirmation links
    pub app_url: String,
    pub require_email_confirmation: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: StorageClient,
    pub oauth: OAuthProviders,
    pub auth: AuthSettings,
}

/// Test state pointing object storage at a mock server, with no OAuth provider configured
/// and email confirmation disabled.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, server_url): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            storage: StorageClient::new(server_url, String::new()),
            oauth: OAuthProviders::default(),
            auth: AuthSettings {
                app_url: "http://localhost:8080".to_string(),
                require_email_confirmation: false,
            },
        }
    }
}
