//! Public content listings.

use sea_orm::DatabaseConnection;

use crate::{
    model::content::{AlertDto, AnnouncementDto, EventDto},
    server::{
        data::content::{
            alert::AlertRepository, announcement::AnnouncementRepository, event::EventRepository,
        },
        error::Error,
    },
};

/// Whether an alert targeted at `alert_country` is shown to a viewer in `viewer_country`
///
/// An alert without a target country (or with a blank one) is global. A targeted alert is
/// shown only to viewers with a country, when the two match as a case-insensitive substring
/// in either direction.
pub fn alert_visible_to(alert_country: Option<&str>, viewer_country: Option<&str>) -> bool {
    let Some(target) = alert_country
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
    else {
        return true;
    };

    let Some(viewer) = viewer_country
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
    else {
        return false;
    };

    viewer.contains(&target) || target.contains(&viewer)
}

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_active_announcements(&self) -> Result<Vec<AnnouncementDto>, Error> {
        let announcements = AnnouncementRepository::new(self.db).list_active().await?;

        Ok(announcements.into_iter().map(AnnouncementDto::from).collect())
    }

    pub async fn list_active_events(&self) -> Result<Vec<EventDto>, Error> {
        let events = EventRepository::new(self.db).list_active().await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Active alerts visible to a viewer, see [`alert_visible_to`]
    pub async fn list_visible_alerts(
        &self,
        viewer_country: Option<&str>,
    ) -> Result<Vec<AlertDto>, Error> {
        let alerts = AlertRepository::new(self.db).list_active().await?;

        Ok(alerts
            .into_iter()
            .filter(|alert| alert_visible_to(alert.country.as_deref(), viewer_country))
            .map(AlertDto::from)
            .collect())
    }
}
