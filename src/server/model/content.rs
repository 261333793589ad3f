//! Admin-managed content: normalized records built from submitted forms, and row to DTO
//! conversions for the public and admin views.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    model::content::{
        AlertDto, AlertForm, AlertSeverity, AnnouncementDto, AnnouncementForm, EventDto,
        EventForm,
    },
    server::{
        error::validation::ValidationError,
        util::form::{blank_to_none, normalize_date, require},
    },
};

/// Announcement ready to be written.
///
/// Dates are parsed or `None`, never an empty string. `active` is `true` unless the form
/// explicitly sent `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnouncementRecord {
    /// `None` inserts a new row
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl TryFrom<AnnouncementForm> for AnnouncementRecord {
    type Error = ValidationError;

    fn try_from(form: AnnouncementForm) -> Result<Self, Self::Error> {
        Ok(Self {
            id: form.id,
            title: require("title", &form.title)?,
            description: form.description.unwrap_or_default(),
            image_url: blank_to_none(form.image_url),
            date: normalize_date("date", form.date)?,
            end_date: normalize_date("endDate", form.end_date)?,
            active: form.active.unwrap_or(true),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventRecord {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl TryFrom<EventForm> for EventRecord {
    type Error = ValidationError;

    fn try_from(form: EventForm) -> Result<Self, Self::Error> {
        Ok(Self {
            id: form.id,
            title: require("title", &form.title)?,
            description: form.description.unwrap_or_default(),
            location: blank_to_none(form.location),
            image_url: blank_to_none(form.image_url),
            date: normalize_date("date", form.date)?,
            end_date: normalize_date("endDate", form.end_date)?,
            active: form.active.unwrap_or(true),
        })
    }
}

/// Alert ready to be written, a blank country makes the alert global.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertRecord {
    pub id: Option<Uuid>,
    pub title: String,
    pub message: Option<String>,
    pub severity: AlertSeverity,
    pub country: Option<String>,
    pub active: bool,
}

impl TryFrom<AlertForm> for AlertRecord {
    type Error = ValidationError;

    fn try_from(form: AlertForm) -> Result<Self, Self::Error> {
        Ok(Self {
            id: form.id,
            title: require("title", &form.title)?,
            message: blank_to_none(form.message),
            severity: form.severity.unwrap_or_default(),
            country: blank_to_none(form.country),
            active: form.active.unwrap_or(true),
        })
    }
}

impl From<entity::announcement::Model> for AnnouncementDto {
    fn from(row: entity::announcement::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            image_url: row.image_url,
            date: row.date,
            end_date: row.end_date,
            active: row.active,
        }
    }
}

impl From<entity::event::Model> for EventDto {
    fn from(row: entity::event::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            location: row.location,
            image_url: row.image_url,
            date: row.date,
            end_date: row.end_date,
            active: row.active,
        }
    }
}

impl From<entity::alert::Model> for AlertDto {
    fn from(row: entity::alert::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            message: row.message,
            severity: AlertSeverity::from_db(&row.severity),
            country: row.country,
            active: row.active,
            created_at: row.created_at,
        }
    }
}
