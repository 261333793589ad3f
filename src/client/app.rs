use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::ErrorModal,
    router::Route,
    store::{error::ErrorState, settings::SettingsState, user::UserState},
    util::api::get_session,
};

#[component]
pub fn App() -> Element {
    let mut user_store = use_store(UserState::default);
    let settings_store = use_store(SettingsState::default);
    let error_store = use_store(ErrorState::default);

    use_context_provider(|| user_store);
    use_context_provider(|| settings_store);
    use_context_provider(|| error_store);

    // Resolve the session once on first render
    use_effect(move || {
        spawn(async move {
            let user = match get_session().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::error!("Failed to fetch session: {}", err);
                    None
                }
            };

            let mut state = user_store.write();
            state.user = user;
            state.fetched = true;
        });
    });

    let settings = settings_store.read();
    let text_class = settings.text_size.class();
    let data_theme = settings.theme.data_theme();

    rsx! {
        document::Title { "ConsulaRO" }
        document::Meta {
            name: "description",
            content: "Consulatul la un click distanță!"
        }
        div {
            class: "min-h-screen bg-base-100 {text_class}",
            "data-theme": data_theme,
            Router::<Route> {}
            ErrorModal {}
        }
    }
}
