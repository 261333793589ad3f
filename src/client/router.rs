use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{Admin, Auth, Events, Faq, Home, NotFound, Profile, SendDocs, Services, Settings, Splash},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Splash {},

    #[route("/auth")]
    Auth {},

    #[layout(AppLayout)]

    #[route("/home")]
    Home {},

    #[route("/services")]
    Services {},

    #[route("/send-docs")]
    SendDocs {},

    #[route("/events")]
    Events {},

    #[route("/faq")]
    Faq {},

    #[route("/settings")]
    Settings {},

    #[route("/profile")]
    Profile {},

    #[end_layout]

    #[route("/admin")]
    Admin {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
