use dioxus::prelude::*;

use crate::client::{
    components::{BottomNav, Navbar},
    router::Route,
};

/// Header and bottom navigation around every content view
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
        BottomNav {}
    }
}
