use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Modal,
        routes::{
            admin::form::{ActiveToggle, TextArea, TextInput},
            home::severity_class,
        },
        store::error::ErrorState,
        util::api::{admin_delete_alert, admin_get_alerts, admin_save_alert},
    },
    model::content::{AlertDto, AlertForm, AlertSeverity},
};

const SEVERITIES: [(AlertSeverity, &str); 3] = [
    (AlertSeverity::Info, "Informare"),
    (AlertSeverity::Warning, "Atenționare"),
    (AlertSeverity::Critical, "Critic"),
];

#[component]
pub fn AlertsAdmin() -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut rows = use_signal(Vec::<AlertDto>::new);
    let mut editing = use_signal(|| None::<AlertForm>);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        reload();
        spawn(async move {
            match admin_get_alerts().await {
                Ok(list) => rows.set(list),
                Err(err) => {
                    tracing::error!("Failed to load alerts: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    let save = move |form: AlertForm| {
        spawn(async move {
            match admin_save_alert(&form).await {
                Ok(saved) => {
                    tracing::info!("Saved alert {}", saved.id);
                    editing.set(None);
                    reload += 1;
                }
                Err(err) => error_store.write().show(err),
            }
        });
    };

    rsx! {
        div { class: "flex flex-col gap-3",
            button {
                class: "btn btn-primary btn-sm self-end",
                onclick: move |_| editing.set(Some(AlertForm::default())),
                "Adaugă alertă"
            }
            for row in rows() {
                div { key: "{row.id}", class: "flex items-center gap-3 p-3 rounded-lg bg-base-100 shadow-sm",
                    span { class: "badge {severity_class(row.severity)}", "{row.severity.as_str()}" }
                    div { class: "flex-1 min-w-0",
                        p { class: "font-semibold truncate", "{row.title}" }
                        p { class: "text-xs opacity-60",
                            {row.country.clone().unwrap_or_else(|| "Toate țările".to_string())}
                        }
                    }
                    if !row.active {
                        span { class: "badge badge-ghost", "Inactiv" }
                    }
                    button {
                        class: "btn btn-sm",
                        onclick: {
                            let row = row.clone();
                            move |_| editing.set(Some(AlertForm::from(row.clone())))
                        },
                        "Editează"
                    }
                    button {
                        class: "btn btn-sm btn-error",
                        onclick: {
                            let id = row.id;
                            move |_| {
                                spawn(async move {
                                    match admin_delete_alert(id).await {
                                        Ok(()) => reload += 1,
                                        Err(err) => error_store.write().show(err),
                                    }
                                });
                            }
                        },
                        "Șterge"
                    }
                }
            }
        }

        if let Some(form) = editing() {
            AlertEditor {
                form,
                on_save: save,
                on_close: move |_| editing.set(None),
            }
        }
    }
}

#[component]
fn AlertEditor(form: AlertForm, on_save: EventHandler<AlertForm>, on_close: EventHandler<()>) -> Element {
    let mut draft = use_signal(|| form.clone());
    let current = draft();
    let title = if current.id.is_some() { "Editează alertă" } else { "Alertă nouă" };
    let severity = current.severity.unwrap_or_default();

    rsx! {
        Modal { title: title.to_string(), on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-2",
                TextInput {
                    label: "Titlu",
                    value: Some(current.title.clone()),
                    on_change: move |value: Option<String>| draft.write().title = value.unwrap_or_default(),
                }
                TextArea {
                    label: "Mesaj",
                    value: current.message.clone(),
                    on_change: move |value| draft.write().message = value,
                }
                label { class: "form-control w-full",
                    span { class: "label-text text-xs", "Tip" }
                    select {
                        class: "select select-bordered select-sm w-full",
                        value: severity.as_str(),
                        onchange: move |evt| {
                            draft.write().severity = Some(AlertSeverity::from_db(&evt.value()));
                        },
                        for (option_severity, label) in SEVERITIES {
                            option { value: option_severity.as_str(), "{label}" }
                        }
                    }
                }
                TextInput {
                    label: "Țară (gol pentru toate)",
                    value: current.country.clone(),
                    on_change: move |value| draft.write().country = value,
                }
                ActiveToggle {
                    value: current.active,
                    on_change: move |value| draft.write().active = Some(value),
                }
                button { class: "btn btn-primary", onclick: move |_| on_save.call(draft()), "Salvează" }
            }
        }
    }
}
