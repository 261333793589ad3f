use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLocationDot;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{format_date_range, Page},
        routes::home::{Selected, SelectedDetail},
        store::error::ErrorState,
        util::api::get_events,
    },
    model::content::EventDto,
};

#[component]
pub fn Events() -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut events = use_signal(Vec::<EventDto>::new);
    let mut selected = use_signal(|| None::<Selected>);

    use_effect(move || {
        spawn(async move {
            match get_events().await {
                Ok(rows) => events.set(rows),
                Err(err) => {
                    tracing::error!("Failed to load events: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    rsx! {
        document::Title { "Evenimente | ConsulaRO" }
        Page { class: "flex flex-col gap-4",
            h2 { class: "text-2xl font-bold text-primary", "Evenimente" }
            if events.read().is_empty() {
                p { class: "text-sm italic opacity-60 text-center py-4", "Nu există evenimente active." }
            }
            for event in events() {
                div {
                    key: "{event.id}",
                    class: "flex gap-3 rounded-xl shadow-sm p-3 bg-base-100 cursor-pointer",
                    onclick: {
                        let event = event.clone();
                        move |_| selected.set(Some(Selected::Event(event.clone())))
                    },
                    if let Some(url) = &event.image_url {
                        img { class: "w-24 h-24 rounded-lg object-cover", src: "{url}", alt: "{event.title}" }
                    }
                    div { class: "flex-1 flex flex-col justify-center gap-1",
                        h4 { class: "font-bold text-sm", "{event.title}" }
                        if let Some(location) = &event.location {
                            div { class: "text-xs text-primary font-semibold flex items-center gap-1",
                                Icon { width: 12, height: 12, icon: FaLocationDot }
                                "{location}"
                            }
                        }
                        p { class: "text-xs opacity-60", "{format_date_range(event.date, event.end_date)}" }
                        p { class: "text-xs opacity-80 line-clamp-2", "{event.description}" }
                    }
                }
            }
        }
        SelectedDetail { selected }
    }
}
