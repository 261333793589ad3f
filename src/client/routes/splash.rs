use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

/// Branded landing screen shown until the session request answers
#[component]
pub fn Splash() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();

    use_effect(move || {
        let state = user_store.read();
        if !state.fetched {
            return;
        }

        if state.user.is_some() {
            navigator.replace(Route::Home {});
        } else {
            navigator.replace(Route::Auth {});
        }
    });

    rsx! {
        div {
            class: "fixed inset-0 flex flex-col items-center justify-center bg-primary text-primary-content",
            h1 { class: "text-5xl font-bold mb-4", "ConsulaRO" }
            p { class: "text-xl font-medium animate-pulse", "Consulatul la un click distanță!" }
        }
    }
}
