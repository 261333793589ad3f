use dioxus::prelude::*;

use crate::client::components::Modal;

/// Announcement, event or alert opened from a card
///
/// Clicking the image toggles an image-only full-screen view.
#[component]
pub fn DetailModal(
    title: String,
    image_url: Option<String>,
    subtitle: Option<String>,
    description: String,
    on_close: EventHandler<()>,
) -> Element {
    let mut image_only = use_signal(|| false);

    rsx! {
        Modal {
            title: title.clone(),
            full_screen: image_only(),
            on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-4",
                if let Some(url) = image_url {
                    img {
                        class: if image_only() { "w-full object-contain cursor-zoom-out" } else { "w-full h-56 object-cover rounded cursor-zoom-in" },
                        src: "{url}",
                        alt: "{title}",
                        onclick: move |_| image_only.toggle(),
                    }
                }
                if !image_only() {
                    if let Some(subtitle) = subtitle {
                        p { class: "text-sm opacity-70", "{subtitle}" }
                    }
                    p { class: "whitespace-pre-line", "{description}" }
                }
            }
        }
    }
}
