use dioxus::prelude::*;

use crate::client::{
    components::Page,
    store::settings::{Language, SettingsState, TextSize, Theme},
};

#[component]
pub fn Settings() -> Element {
    let mut settings_store = use_context::<Store<SettingsState>>();
    let settings = settings_store.read().clone();

    let themes = [
        (Theme::Light, "Luminos"),
        (Theme::Dark, "Întunecat"),
        (Theme::Auto, "Automat"),
    ];

    rsx! {
        document::Title { "Setări | ConsulaRO" }
        Page { class: "flex flex-col gap-6",
            h2 { class: "text-2xl font-bold text-primary", "Setări" }

            section { class: "flex flex-col gap-2",
                h3 { class: "font-bold", "Limbă" }
                select {
                    class: "select select-bordered w-full",
                    value: settings.language.code(),
                    onchange: move |evt| {
                        if let Some(language) = Language::from_code(&evt.value()) {
                            settings_store.write().language = language;
                        }
                    },
                    for language in Language::ALL {
                        option { value: language.code(), "{language.label()}" }
                    }
                }
            }

            section { class: "flex flex-col gap-2",
                h3 { class: "font-bold", "Mărime text" }
                div { class: "join",
                    for size in TextSize::ALL {
                        button {
                            class: if settings.text_size == size { "btn join-item btn-primary" } else { "btn join-item" },
                            onclick: move |_| settings_store.write().text_size = size,
                            "{size.label()}"
                        }
                    }
                }
            }

            section { class: "flex flex-col gap-2",
                h3 { class: "font-bold", "Temă" }
                div { class: "join",
                    for (theme, label) in themes {
                        button {
                            class: if settings.theme == theme { "btn join-item btn-primary" } else { "btn join-item" },
                            onclick: move |_| settings_store.write().theme = theme,
                            "{label}"
                        }
                    }
                }
            }

            section { class: "flex items-center justify-between",
                h3 { class: "font-bold", "Notificări" }
                input {
                    r#type: "checkbox",
                    class: "toggle toggle-primary",
                    checked: settings.notifications,
                    onchange: move |evt| settings_store.write().notifications = evt.checked(),
                }
            }
        }
    }
}
