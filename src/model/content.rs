use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    #[default]
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Parse a stored severity, unknown values fall back to `Info`
    pub fn from_db(severity: &str) -> Self {
        match severity {
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            _ => Self::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: Uuid,
    pub title: String,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub country: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin form for creating or editing an announcement.
///
/// Dates arrive as raw `YYYY-MM-DD` strings from the form inputs, empty strings mean unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AnnouncementForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EventForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AlertForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub severity: Option<AlertSeverity>,
    pub country: Option<String>,
    pub active: Option<bool>,
}

impl From<AnnouncementDto> for AnnouncementForm {
    fn from(dto: AnnouncementDto) -> Self {
        Self {
            id: Some(dto.id),
            title: dto.title,
            description: Some(dto.description),
            image_url: dto.image_url,
            date: dto.date.map(|d| d.to_string()),
            end_date: dto.end_date.map(|d| d.to_string()),
            active: Some(dto.active),
        }
    }
}

impl From<EventDto> for EventForm {
    fn from(dto: EventDto) -> Self {
        Self {
            id: Some(dto.id),
            title: dto.title,
            description: Some(dto.description),
            location: dto.location,
            image_url: dto.image_url,
            date: dto.date.map(|d| d.to_string()),
            end_date: dto.end_date.map(|d| d.to_string()),
            active: Some(dto.active),
        }
    }
}

impl From<AlertDto> for AlertForm {
    fn from(dto: AlertDto) -> Self {
        Self {
            id: Some(dto.id),
            title: dto.title,
            message: dto.message,
            severity: Some(dto.severity),
            country: dto.country,
            active: Some(dto.active),
        }
    }
}
