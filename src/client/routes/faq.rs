use dioxus::prelude::*;

use crate::client::{components::Page, data::faq::FAQ_CATEGORIES};

#[component]
pub fn Faq() -> Element {
    rsx! {
        document::Title { "Întrebări frecvente | ConsulaRO" }
        Page { class: "flex flex-col gap-4",
            h2 { class: "text-2xl font-bold text-primary", "Întrebări frecvente" }
            for category in FAQ_CATEGORIES {
                section { key: "{category.id}", class: "flex flex-col gap-2",
                    h3 { class: "font-bold text-lg", "{category.title}" }
                    for entry in category.questions {
                        div { class: "collapse collapse-arrow bg-base-100 border border-base-300",
                            input { r#type: "checkbox" }
                            div { class: "collapse-title font-semibold text-sm", "{entry.question}" }
                            div { class: "collapse-content text-sm", p { "{entry.answer}" } }
                        }
                    }
                }
            }
        }
    }
}
