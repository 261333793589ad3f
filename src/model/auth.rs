use serde::{Deserialize, Serialize};

use crate::model::user::UserProfileDto;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignUpDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

/// Result of a sign-up, either a signed in session or a pending email confirmation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SignUpResultDto {
    SignedIn { profile: UserProfileDto },
    ConfirmationRequired,
}
