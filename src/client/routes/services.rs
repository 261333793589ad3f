use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronRight;
use dioxus_free_icons::Icon;

use crate::client::{components::Page, data::services::SERVICE_CATEGORIES};

/// Directory of consular services linking out to the online booking portal
#[component]
pub fn Services() -> Element {
    rsx! {
        document::Title { "Servicii | ConsulaRO" }
        Page { class: "flex flex-col gap-4",
            h2 { class: "text-2xl font-bold text-primary", "Servicii consulare" }
            for category in SERVICE_CATEGORIES {
                div { key: "{category.id}", class: "rounded-xl shadow-sm bg-base-100 overflow-hidden",
                    h3 { class: "font-bold text-lg p-4 bg-base-200", "{category.title}" }
                    ul { class: "divide-y divide-base-200",
                        for sub in category.sub_services {
                            li {
                                a {
                                    class: "flex justify-between items-center p-3 pl-6 text-sm hover:bg-base-200",
                                    href: sub.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{sub.name}"
                                    Icon { width: 12, height: 12, icon: FaChevronRight }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
