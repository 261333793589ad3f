use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaGear, FaUser};
use dioxus_free_icons::Icon;

use crate::client::{
    router::Route,
    store::{
        settings::{Language, SettingsState},
        user::UserState,
    },
};

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let mut settings_store = use_context::<Store<SettingsState>>();

    let signed_in = user_store.read().user.is_some();
    let language = settings_store.read().language;

    rsx! {
        div {
            class: "navbar bg-primary text-primary-content fixed top-0 z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl font-bold", "ConsulaRO" }
                }
            }
            div {
                class: "navbar-end gap-1",
                select {
                    class: "select select-ghost select-sm w-20",
                    value: language.code(),
                    onchange: move |evt| {
                        if let Some(language) = Language::from_code(&evt.value()) {
                            settings_store.write().language = language;
                        }
                    },
                    for language in Language::ALL {
                        option { value: language.code(), "{language.code()}" }
                    }
                }
                if signed_in {
                    Link { to: Route::Profile {}, class: "btn btn-ghost btn-sm btn-circle",
                        Icon { width: 18, height: 18, icon: FaUser }
                    }
                }
                Link { to: Route::Settings {}, class: "btn btn-ghost btn-sm btn-circle",
                    Icon { width: 18, height: 18, icon: FaGear }
                }
            }
        }
    }
}
