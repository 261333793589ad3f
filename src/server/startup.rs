use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::Error,
    model::app::{AppState, AuthSettings},
    service::auth::oauth::{OAuthProvider, OAuthProviders, ProviderKind},
    storage::StorageClient,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = tower_sessions_redis_store::fred::prelude::Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside of debug builds only
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

pub fn build_storage_client(config: &Config) -> StorageClient {
    StorageClient::new(&config.storage_url, &config.storage_service_key)
}

/// Build an OAuth client for every provider with configured credentials
pub fn build_oauth_providers(config: &Config) -> Result<OAuthProviders, Error> {
    let google = config
        .google
        .as_ref()
        .map(|credentials| OAuthProvider::new(ProviderKind::Google, credentials, &config.app_url))
        .transpose()?;
    let facebook = config
        .facebook
        .as_ref()
        .map(|credentials| {
            OAuthProvider::new(ProviderKind::Facebook, credentials, &config.app_url)
        })
        .transpose()?;

    Ok(OAuthProviders { google, facebook })
}

/// Assemble the shared application state from configuration and an open database
pub fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    Ok(AppState {
        db,
        storage: build_storage_client(config),
        oauth: build_oauth_providers(config)?,
        auth: AuthSettings {
            app_url: config.app_url.clone(),
            require_email_confirmation: config.require_email_confirmation,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::OAuthClientConfig;

    fn config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            valkey_url: "redis://127.0.0.1:6379".to_string(),
            app_url: "http://localhost:8080".to_string(),
            storage_url: "http://localhost:54321".to_string(),
            storage_service_key: "service-key".to_string(),
            require_email_confirmation: true,
            max_upload_bytes: crate::server::config::DEFAULT_MAX_UPLOAD_BYTES,
            google: Some(OAuthClientConfig {
                client_id: "google-client".to_string(),
                client_secret: "google-secret".to_string(),
            }),
            facebook: None,
        }
    }

    #[test]
    fn builds_only_configured_providers() {
        let providers = build_oauth_providers(&config()).unwrap();

        assert!(providers.get(ProviderKind::Google).is_ok());
        assert!(providers.get(ProviderKind::Facebook).is_err());
    }

    #[tokio::test]
    async fn carries_auth_settings_into_state() {
        let config = config();
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let state = build_app_state(&config, db).unwrap();

        assert!(state.auth.require_email_confirmation);
        assert_eq!(state.auth.app_url, "http://localhost:8080");
    }
}
