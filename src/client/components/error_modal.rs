use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaCopy};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::Modal,
    store::{error::ErrorState, user::UserState},
    util::{api::admin_get_maintenance_sql, browser::write_clipboard},
};

/// Shows the current API failure
///
/// When the failure hints at a schema mismatch, administrators can fetch the maintenance
/// script from here, copy it and run it against the database.
#[component]
pub fn ErrorModal() -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let user_store = use_context::<Store<UserState>>();
    let mut sql = use_signal(|| None::<String>);
    let mut sql_failed = use_signal(|| None::<String>);
    let mut copied = use_signal(|| false);

    let Some(error) = error_store.read().error.clone() else {
        return rsx! {};
    };
    let can_repair = error.maintenance_hint && user_store.read().is_admin();

    let show_sql = move |_| {
        spawn(async move {
            match admin_get_maintenance_sql().await {
                Ok(script) => sql.set(Some(script)),
                Err(err) => {
                    tracing::error!("Failed to fetch maintenance script: {}", err);
                    sql_failed.set(Some(err.message));
                }
            }
        });
    };

    let copy_sql = move |_| {
        let Some(script) = sql() else {
            return;
        };
        spawn(async move {
            match write_clipboard(&script).await {
                Ok(()) => copied.set(true),
                Err(err) => {
                    tracing::error!("Failed to copy maintenance script: {}", err);
                    sql_failed.set(Some(err.message));
                }
            }
        });
    };

    rsx! {
        Modal {
            title: "A apărut o eroare",
            on_close: move |_| {
                sql.set(None);
                sql_failed.set(None);
                copied.set(false);
                error_store.write().dismiss();
            },
            div { class: "flex flex-col gap-3",
                p { "{error.message}" }
                if can_repair {
                    if let Some(script) = sql() {
                        p { class: "text-sm", "Rulați scriptul de mai jos în consola bazei de date:" }
                        pre { class: "bg-base-200 p-2 rounded text-xs overflow-x-auto max-h-64", "{script}" }
                        button { class: "btn btn-sm btn-outline", onclick: copy_sql,
                            if copied() {
                                Icon { width: 14, height: 14, icon: FaCheck }
                                "Copiat"
                            } else {
                                Icon { width: 14, height: 14, icon: FaCopy }
                                "Copiază scriptul"
                            }
                        }
                    } else {
                        button { class: "btn btn-warning btn-sm", onclick: show_sql, "Arată scriptul SQL de reparare" }
                    }
                    if let Some(reason) = sql_failed() {
                        p { class: "text-error text-sm", "{reason}" }
                    }
                }
            }
        }
    }
}
