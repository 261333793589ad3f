use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        document::Title { "Pagină inexistentă | ConsulaRO" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl font-bold", "404" }
            p { "Pagina /{path} nu există." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Înapoi acasă" }
        }
    }
}
