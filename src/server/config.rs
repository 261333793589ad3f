use crate::server::error::config::ConfigError;

/// Request body limit for the upload routes when `MAX_UPLOAD_BYTES` is unset
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Client credentials for one OAuth2 provider
#[derive(Clone, Debug)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Public base URL of the application, used for OAuth redirects and confirmation links
    pub app_url: String,
    pub storage_url: String,
    pub storage_service_key: String,
    pub require_email_confirmation: bool,
    /// Largest multipart body accepted by the avatar, document and image upload routes
    pub max_upload_bytes: usize,
    pub google: Option<OAuthClientConfig>,
    pub facebook: Option<OAuthClientConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            app_url: optional("APP_URL")
                .unwrap_or_else(|| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            storage_url: required("STORAGE_URL")?
                .trim_end_matches('/')
                .to_string(),
            storage_service_key: required("STORAGE_SERVICE_KEY")?,
            require_email_confirmation: parse_bool(
                "REQUIRE_EMAIL_CONFIRMATION",
                optional("REQUIRE_EMAIL_CONFIRMATION"),
            )?,
            max_upload_bytes: parse_size("MAX_UPLOAD_BYTES", optional("MAX_UPLOAD_BYTES"))?,
            google: oauth_client("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET")?,
            facebook: oauth_client("FACEBOOK_CLIENT_ID", "FACEBOOK_CLIENT_SECRET")?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bool(var: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}

fn parse_size(var: &str, value: Option<String>) -> Result<usize, ConfigError> {
    match value {
        None => Ok(DEFAULT_MAX_UPLOAD_BYTES),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("expected a positive number of bytes, got {:?}", value),
            }),
    }
}

/// A provider is enabled only when both its ID and secret are set
fn oauth_client(id_var: &str, secret_var: &str) -> Result<Option<OAuthClientConfig>, ConfigError> {
    match (optional(id_var), optional(secret_var)) {
        (Some(client_id), Some(client_secret)) => Ok(Some(OAuthClientConfig {
            client_id,
            client_secret,
        })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::MissingEnvVar(secret_var.to_string())),
        (None, Some(_)) => Err(ConfigError::MissingEnvVar(id_var.to_string())),
    }
}
