use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Full-screen overlay centering its children in a card
///
/// Clicking outside the card or the close button triggers `on_close`.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] full_screen: bool,
    children: Element,
) -> Element {
    let card_class = if full_screen {
        "bg-base-100 w-full h-full overflow-y-auto"
    } else {
        "bg-base-100 rounded-lg shadow-lg max-w-lg w-full mx-4 max-h-[90vh] overflow-y-auto"
    };

    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/40",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: card_class,
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "flex items-center justify-between p-4 border-b border-base-300",
                    h3 { class: "font-bold text-lg", "{title}" }
                    button {
                        class: "btn btn-ghost btn-sm btn-circle",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 16, height: 16, icon: FaXmark }
                    }
                }
                div { class: "p-4", {children} }
            }
        }
    }
}
