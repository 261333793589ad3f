//! Role-gated admin console.
//!
//! Every request made from here is checked again on the server, the client-side gate only
//! decides what to render.

mod alerts;
mod announcements;
mod documents;
mod events;
mod form;
mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

use crate::client::{components::Page, router::Route, store::user::UserState};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Announcements,
    Events,
    Alerts,
    Users,
    Documents,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Self::Announcements,
        Self::Events,
        Self::Alerts,
        Self::Users,
        Self::Documents,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Announcements => "Anunțuri",
            Self::Events => "Evenimente",
            Self::Alerts => "Alerte",
            Self::Users => "Utilizatori",
            Self::Documents => "Documente",
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let mut tab = use_signal(|| Tab::Announcements);

    let state = user_store.read();
    if !state.fetched {
        return rsx! { Page { span { class: "loading loading-spinner" } } };
    }
    if !state.is_admin() {
        return rsx! {
            Page { class: "flex flex-col items-center justify-center gap-4",
                p { class: "font-bold", "Acces interzis" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Înapoi acasă" }
            }
        };
    }

    rsx! {
        document::Title { "Administrare | ConsulaRO" }
        div { class: "min-h-screen p-4 flex flex-col gap-4 max-w-4xl mx-auto",
            div { class: "flex items-center gap-2",
                Link { to: Route::Profile {}, class: "btn btn-ghost btn-sm btn-circle",
                    Icon { width: 16, height: 16, icon: FaArrowLeft }
                }
                h2 { class: "text-2xl font-bold", "Panou administrare" }
            }
            div { role: "tablist", class: "tabs tabs-boxed overflow-x-auto",
                for item in Tab::ALL {
                    button {
                        role: "tab",
                        class: if tab() == item { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(item),
                        "{item.label()}"
                    }
                }
            }
            match tab() {
                Tab::Announcements => rsx! { announcements::AnnouncementsAdmin {} },
                Tab::Events => rsx! { events::EventsAdmin {} },
                Tab::Alerts => rsx! { alerts::AlertsAdmin {} },
                Tab::Users => rsx! { users::UsersAdmin {} },
                Tab::Documents => rsx! { documents::DocumentsAdmin {} },
            }
        }
    }
}
