use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaGoogle};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        router::Route,
        store::{error::ErrorState, user::UserState},
        util::api::{oauth_login_path, sign_in, sign_up},
    },
    model::auth::{SignInDto, SignUpDto, SignUpResultDto},
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn Auth() -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let mut error_store = use_context::<Store<ErrorState>>();
    let navigator = use_navigator();

    let mut mode = use_signal(|| AuthMode::Login);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut notice = use_signal(|| None::<&'static str>);

    // Already signed in, nothing to do here
    use_effect(move || {
        if user_store.read().user.is_some() {
            navigator.replace(Route::Home {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        pending.set(true);
        notice.set(None);

        spawn(async move {
            let result = match mode() {
                AuthMode::Login => sign_in(&SignInDto {
                    email: email(),
                    password: password(),
                })
                .await
                .map(Some),
                AuthMode::Register => sign_up(&SignUpDto {
                    email: email(),
                    password: password(),
                    first_name: first_name(),
                    last_name: last_name(),
                })
                .await
                .map(|result| match result {
                    SignUpResultDto::SignedIn { profile } => Some(profile),
                    SignUpResultDto::ConfirmationRequired => None,
                }),
            };

            match result {
                Ok(Some(profile)) => {
                    user_store.write().user = Some(profile);
                    navigator.replace(Route::Home {});
                }
                Ok(None) => {
                    notice.set(Some(
                        "Cont creat. Verificați emailul pentru linkul de confirmare.",
                    ));
                    mode.set(AuthMode::Login);
                }
                Err(err) => {
                    tracing::debug!("Authentication failed: {}", err);
                    error_store.write().show(err);
                }
            }

            pending.set(false);
        });
    };

    let registering = mode() == AuthMode::Register;

    rsx! {
        document::Title { "Autentificare | ConsulaRO" }
        div { class: "min-h-screen flex flex-col justify-center items-center py-12 px-4 bg-base-200",
            div { class: "text-center mb-6",
                h2 { class: "text-3xl font-extrabold text-primary", "ConsulaRO" }
                p { class: "mt-2 opacity-70",
                    if registering { "Creează un cont nou" } else { "Autentificare" }
                }
            }
            div { class: "card bg-base-100 shadow w-full max-w-md",
                form { class: "card-body gap-3", onsubmit: submit,
                    if let Some(text) = notice() {
                        div { class: "alert alert-success text-sm", "{text}" }
                    }
                    if registering {
                        div { class: "grid grid-cols-2 gap-2",
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "Prenume",
                                value: "{first_name}",
                                oninput: move |evt| first_name.set(evt.value()),
                            }
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "Nume",
                                value: "{last_name}",
                                oninput: move |evt| last_name.set(evt.value()),
                            }
                        }
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Parola",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary w-full",
                        r#type: "submit",
                        disabled: pending(),
                        if registering { "Creează cont" } else { "Autentificare" }
                    }
                    div { class: "divider text-sm", "sau continuă cu" }
                    div { class: "grid grid-cols-2 gap-3",
                        a { class: "btn btn-outline", href: oauth_login_path("google"),
                            Icon { width: 18, height: 18, icon: FaGoogle }
                            span { "Google" }
                        }
                        a { class: "btn btn-outline", href: oauth_login_path("facebook"),
                            Icon { width: 18, height: 18, icon: FaFacebook }
                            span { "Facebook" }
                        }
                    }
                    div { class: "divider text-sm", "sau" }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| {
                            notice.set(None);
                            mode.set(if registering { AuthMode::Login } else { AuthMode::Register });
                        },
                        if registering { "Ai deja cont? Autentifică-te" } else { "Nu ai cont? Înregistrează-te" }
                    }
                    Link { to: Route::Home {}, class: "btn btn-ghost btn-xs opacity-60",
                        "Continuă ca vizitator (Funcționalități limitate)"
                    }
                }
            }
        }
    }
}
