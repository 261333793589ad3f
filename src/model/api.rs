use serde::{Deserialize, Serialize};

/// Broad category of a failed request, used by the client to pick a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Network,
    Validation,
    Auth,
    Unknown,
}

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    pub kind: ErrorKind,
    /// Set when the failure suggests the database schema needs the maintenance script
    #[serde(default)]
    pub maintenance_hint: bool,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            error: error.into(),
            kind,
            maintenance_hint: false,
        }
    }
}

/// Public URL of an uploaded object
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UploadedUrlDto {
    pub url: String,
}

/// Remediation script shown to administrators
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MaintenanceSqlDto {
    pub sql: String,
}
