use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Parse a stored role, unknown values fall back to `User`
    pub fn from_db(role: &str) -> Self {
        match role {
            "admin" => Self::Admin,
            "super_admin" => Self::SuperAdmin,
            _ => Self::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
    pub post_code: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfileDto {
    /// First and last name joined by a space, empty parts skipped
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fields a user may change on their own profile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdateDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
    pub post_code: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateRoleDto {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfileDto {
        UserProfileDto {
            id: Uuid::nil(),
            email: Some("ion.popescu@example.com".to_string()),
            first_name: Some("Ion".to_string()),
            last_name: Some("Popescu".to_string()),
            phone: None,
            address: None,
            city: Some("Torino".to_string()),
            county: None,
            country: Some("Italia".to_string()),
            post_code: Some("10121".to_string()),
            username: None,
            avatar_url: Some("https://cdn.example.com/avatar.png".to_string()),
            role: Role::Admin,
            updated_at: None,
        }
    }

    #[test]
    fn profile_round_trips_through_camel_case() {
        let dto = profile();

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["avatarUrl"], "https://cdn.example.com/avatar.png");
        assert_eq!(value["postCode"], "10121");
        assert_eq!(value["role"], "admin");
        assert!(value.get("avatar_url").is_none());

        let back: UserProfileDto = serde_json::from_value(value).unwrap();
        assert_eq!(back, dto);
    }

    #[test]
    fn role_parses_stored_values() {
        assert_eq!(Role::from_db("super_admin"), Role::SuperAdmin);
        assert_eq!(Role::from_db("admin"), Role::Admin);
        assert_eq!(Role::from_db("user"), Role::User);
        assert_eq!(Role::from_db("moderator"), Role::User);
        assert!(Role::SuperAdmin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn display_name_skips_missing_parts() {
        let mut dto = profile();
        assert_eq!(dto.display_name(), "Ion Popescu");

        dto.last_name = None;
        assert_eq!(dto.display_name(), "Ion");

        dto.first_name = Some(" ".to_string());
        assert_eq!(dto.display_name(), "");
    }
}
