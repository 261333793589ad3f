//! Conversions between profile rows and the wire profile.
//!
//! The mapping renames every column (`avatar_url` ↔ `avatarUrl`) and is total in both
//! directions, a row converted to a DTO and back yields the same row.

use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::{
    model::user::{ProfileUpdateDto, Role, UserProfileDto},
    server::util::form::blank_to_none,
};

impl From<entity::profile::Model> for UserProfileDto {
    fn from(profile: entity::profile::Model) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone,
            address: profile.address,
            city: profile.city,
            county: profile.county,
            country: profile.country,
            post_code: profile.post_code,
            username: profile.username,
            avatar_url: profile.avatar_url,
            role: Role::from_db(&profile.role),
            updated_at: profile.updated_at,
        }
    }
}

impl From<UserProfileDto> for entity::profile::ActiveModel {
    fn from(dto: UserProfileDto) -> Self {
        Self {
            id: ActiveValue::Set(dto.id),
            email: ActiveValue::Set(dto.email),
            first_name: ActiveValue::Set(dto.first_name),
            last_name: ActiveValue::Set(dto.last_name),
            phone: ActiveValue::Set(dto.phone),
            address: ActiveValue::Set(dto.address),
            city: ActiveValue::Set(dto.city),
            county: ActiveValue::Set(dto.county),
            country: ActiveValue::Set(dto.country),
            post_code: ActiveValue::Set(dto.post_code),
            username: ActiveValue::Set(dto.username),
            avatar_url: ActiveValue::Set(dto.avatar_url),
            role: ActiveValue::Set(dto.role.as_str().to_string()),
            updated_at: ActiveValue::Set(dto.updated_at),
        }
    }
}

/// Minimal profile written by the bootstrap or the provisioning hook.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSeed {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// User-editable profile fields after normalization, empty strings are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileChanges {
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

impl From<ProfileUpdateDto> for ProfileChanges {
    fn from(dto: ProfileUpdateDto) -> Self {
        Self {
            first_name: blank_to_none(dto.first_name),
            last_name: blank_to_none(dto.last_name),
            phone: blank_to_none(dto.phone),
            address: blank_to_none(dto.address),
            city: blank_to_none(dto.city),
            county: blank_to_none(dto.county),
            country: blank_to_none(dto.country),
            post_code: blank_to_none(dto.post_code),
            username: blank_to_none(dto.username),
            avatar_url: blank_to_none(dto.avatar_url),
        }
    }
}
