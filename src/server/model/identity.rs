//! Identity metadata and new identity parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata captured at sign-up or from an OAuth provider's user info.
///
/// Stored as JSON on the identity row, every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl IdentityMetadata {
    /// Reads metadata from the stored JSON, unknown or malformed values are ignored.
    pub fn from_json(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}

/// Authenticated identity as seen by the profile bootstrap.
#[derive(Clone, Debug)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub metadata: IdentityMetadata,
}

impl From<&entity::auth_user::Model> for Identity {
    fn from(user: &entity::auth_user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            metadata: IdentityMetadata::from_json(&user.metadata),
        }
    }
}

/// Parameters for a new identity row.
#[derive(Clone, Debug)]
pub struct NewIdentity {
    pub email: String,
    pub password_hash: Option<String>,
    /// `email`, `google` or `facebook`
    pub provider: String,
    pub provider_subject: Option<String>,
    pub metadata: IdentityMetadata,
    pub email_confirmed: bool,
    pub confirmation_token: Option<String>,
}
