use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBullhorn, FaCalendar, FaCircleInfo, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{format_date_range, ContentCard, DetailModal, Page},
        data::{APP_DESCRIPTION_FULL, APP_DESCRIPTION_SHORT},
        router::Route,
        store::{error::ErrorState, user::UserState},
        util::api::{get_alerts, get_announcements, get_events},
    },
    model::content::{AlertDto, AlertSeverity, AnnouncementDto, EventDto},
};

/// Item opened in the detail modal
#[derive(Clone, Debug, PartialEq)]
pub enum Selected {
    Announcement(AnnouncementDto),
    Event(EventDto),
    Alert(AlertDto),
}

/// Background class for an alert badge
pub fn severity_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "bg-error text-error-content",
        AlertSeverity::Warning => "bg-warning text-warning-content",
        AlertSeverity::Info => "bg-info text-info-content",
    }
}

/// Renders the detail modal for whatever is currently selected
#[component]
pub fn SelectedDetail(selected: Signal<Option<Selected>>) -> Element {
    let Some(item) = selected() else {
        return rsx! {};
    };

    let (title, image_url, subtitle, description) = match item {
        Selected::Announcement(item) => (
            item.title,
            item.image_url,
            Some(format_date_range(item.date, item.end_date)),
            item.description,
        ),
        Selected::Event(item) => {
            let when = format_date_range(item.date, item.end_date);
            let subtitle = match item.location {
                Some(location) if !when.is_empty() => format!("{} · {}", location, when),
                Some(location) => location,
                None => when,
            };
            (item.title, item.image_url, Some(subtitle), item.description)
        }
        Selected::Alert(item) => (
            item.title,
            None,
            item.country,
            item.message.unwrap_or_default(),
        ),
    };
    let subtitle = subtitle.filter(|subtitle| !subtitle.is_empty());

    rsx! {
        DetailModal {
            title,
            image_url,
            subtitle,
            description,
            on_close: move |_| selected.set(None),
        }
    }
}

#[component]
pub fn Home() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let mut error_store = use_context::<Store<ErrorState>>();

    let mut announcements = use_signal(Vec::<AnnouncementDto>::new);
    let mut events = use_signal(Vec::<EventDto>::new);
    let mut alerts = use_signal(Vec::<AlertDto>::new);
    let mut selected = use_signal(|| None::<Selected>);

    use_effect(move || {
        spawn(async move {
            match get_announcements().await {
                Ok(rows) => announcements.set(rows),
                Err(err) => {
                    tracing::error!("Failed to load announcements: {}", err);
                    error_store.write().show(err);
                }
            }
            match get_events().await {
                Ok(rows) => events.set(rows),
                Err(err) => {
                    tracing::error!("Failed to load events: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    // Alerts depend on the viewer's country, reload when the session changes
    use_effect(move || {
        let _ = user_store.read().user.as_ref().map(|user| user.id);
        spawn(async move {
            match get_alerts().await {
                Ok(rows) => alerts.set(rows),
                Err(err) => tracing::warn!("Failed to load alerts: {}", err),
            }
        });
    });

    let first_name = user_store
        .read()
        .user
        .as_ref()
        .and_then(|user| user.first_name.clone())
        .filter(|name| !name.trim().is_empty());

    rsx! {
        document::Title { "Acasă | ConsulaRO" }
        Page { class: "flex flex-col gap-6",
            div { class: "rounded-2xl p-6 bg-primary text-primary-content shadow-lg",
                h2 { class: "text-2xl font-bold mb-2",
                    if let Some(name) = first_name { "Bine ați venit, {name}" } else { "Bine ați venit" }
                }
                p { class: "opacity-90", "{APP_DESCRIPTION_SHORT}" }
            }

            if !alerts.read().is_empty() {
                section {
                    h3 { class: "text-lg font-bold text-error flex items-center gap-2 mb-3",
                        Icon { width: 18, height: 18, icon: FaTriangleExclamation }
                        "Alerte"
                    }
                    div { class: "flex flex-col gap-2",
                        for alert in alerts() {
                            div {
                                key: "{alert.id}",
                                class: "flex gap-3 items-center rounded-xl shadow-sm p-3 cursor-pointer bg-base-100",
                                onclick: {
                                    let alert = alert.clone();
                                    move |_| selected.set(Some(Selected::Alert(alert.clone())))
                                },
                                div { class: "rounded-lg p-3 {severity_class(alert.severity)}",
                                    Icon { width: 20, height: 20, icon: FaTriangleExclamation }
                                }
                                div { class: "flex-1",
                                    h4 { class: "font-bold text-sm", "{alert.title}" }
                                    if let Some(message) = &alert.message {
                                        p { class: "text-xs opacity-70 line-clamp-2", "{message}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                h3 { class: "text-lg font-bold flex items-center gap-2 mb-3",
                    Icon { width: 18, height: 18, icon: FaBullhorn }
                    "Anunțuri"
                }
                if announcements.read().is_empty() {
                    p { class: "text-sm italic opacity-60 text-center py-4", "Nu există anunțuri momentan." }
                } else {
                    div { class: "flex gap-3 overflow-x-auto snap-x pb-2",
                        for item in announcements() {
                            ContentCard {
                                key: "{item.id}",
                                title: item.title.clone(),
                                image_url: item.image_url.clone(),
                                subtitle: Some(item.description.clone()),
                                on_open: {
                                    let item = item.clone();
                                    move |_| selected.set(Some(Selected::Announcement(item.clone())))
                                },
                            }
                        }
                    }
                }
            }

            section {
                div { class: "flex justify-between items-center mb-3",
                    h3 { class: "text-lg font-bold flex items-center gap-2",
                        Icon { width: 18, height: 18, icon: FaCalendar }
                        "Evenimente"
                    }
                    Link { to: Route::Events {}, class: "text-sm text-primary font-semibold", "Vezi toate" }
                }
                if events.read().is_empty() {
                    p { class: "text-sm italic opacity-60 text-center py-4", "Nu există evenimente active." }
                } else {
                    div { class: "flex gap-3 overflow-x-auto snap-x pb-2",
                        for item in events() {
                            ContentCard {
                                key: "{item.id}",
                                title: item.title.clone(),
                                image_url: item.image_url.clone(),
                                subtitle: item.location.clone(),
                                on_open: {
                                    let item = item.clone();
                                    move |_| selected.set(Some(Selected::Event(item.clone())))
                                },
                            }
                        }
                    }
                }
            }

            section { class: "rounded-xl bg-base-200 p-4",
                h3 { class: "text-lg font-bold flex items-center gap-2 mb-2",
                    Icon { width: 18, height: 18, icon: FaCircleInfo }
                    "Despre ConsulaRO"
                }
                p { class: "text-sm", "{APP_DESCRIPTION_FULL}" }
            }
        }
        SelectedDetail { selected }
    }
}
