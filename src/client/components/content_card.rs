use dioxus::prelude::*;

#[component]
pub fn ContentCard(
    title: String,
    image_url: Option<String>,
    subtitle: Option<String>,
    on_open: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "card bg-base-100 shadow-sm min-w-64 w-full cursor-pointer",
            onclick: move |_| on_open.call(()),
            if let Some(url) = image_url {
                figure {
                    img { class: "h-36 w-full object-cover", src: "{url}", alt: "{title}" }
                }
            }
            div { class: "card-body p-4",
                h3 { class: "card-title text-base", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "text-sm opacity-70", "{subtitle}" }
                }
            }
        }
    }
}
