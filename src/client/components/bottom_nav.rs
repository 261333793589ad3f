use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBook, FaCalendar, FaCircleQuestion, FaHouse, FaPaperPlane,
};
use dioxus_free_icons::{Icon, IconShape};

use crate::client::router::Route;

#[component]
fn NavItem<I: IconShape + Clone + PartialEq + 'static>(
    to: Route,
    icon: I,
    label: &'static str,
) -> Element {
    let current: Route = use_route();
    let class = if current == to {
        "flex flex-col items-center justify-center w-full h-full text-primary bg-base-200"
    } else {
        "flex flex-col items-center justify-center w-full h-full opacity-60"
    };

    rsx! {
        Link { to: to.clone(), class,
            Icon { width: 20, height: 20, icon }
            span { class: "text-xs font-bold", "{label}" }
        }
    }
}

#[component]
pub fn BottomNav() -> Element {
    rsx! {
        nav {
            class: "fixed bottom-0 w-full h-16 bg-base-100 border-t border-base-300 z-40 flex justify-around",
            NavItem { to: Route::Home {}, icon: FaHouse, label: "Acasă" }
            NavItem { to: Route::Services {}, icon: FaBook, label: "Servicii" }
            NavItem { to: Route::SendDocs {}, icon: FaPaperPlane, label: "Trimite" }
            NavItem { to: Route::Events {}, icon: FaCalendar, label: "Evenimente" }
            NavItem { to: Route::Faq {}, icon: FaCircleQuestion, label: "Întrebări" }
        }
    }
}
