use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{format_date_range, Modal},
        routes::admin::form::{ActiveToggle, ImageInput, TextArea, TextInput},
        store::error::ErrorState,
        util::api::{admin_delete_event, admin_get_events, admin_save_event},
    },
    model::content::{EventDto, EventForm},
};

#[component]
pub fn EventsAdmin() -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut rows = use_signal(Vec::<EventDto>::new);
    let mut editing = use_signal(|| None::<EventForm>);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        reload();
        spawn(async move {
            match admin_get_events().await {
                Ok(list) => rows.set(list),
                Err(err) => {
                    tracing::error!("Failed to load events: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    let save = move |form: EventForm| {
        spawn(async move {
            match admin_save_event(&form).await {
                Ok(saved) => {
                    tracing::info!("Saved event {}", saved.id);
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
                onclick: move |_| editing.set(Some(EventForm::default())),
                "Adaugă eveniment"
            }
            for row in rows() {
                div { key: "{row.id}", class: "flex items-center gap-3 p-3 rounded-lg bg-base-100 shadow-sm",
                    div { class: "flex-1 min-w-0",
                        p { class: "font-semibold truncate", "{row.title}" }
                        p { class: "text-xs opacity-60",
                            "{row.location.clone().unwrap_or_default()} {format_date_range(row.date, row.end_date)}"
                        }
                    }
                    if !row.active {
                        span { class: "badge badge-ghost", "Inactiv" }
                    }
                    button {
                        class: "btn btn-sm",
                        onclick: {
                            let row = row.clone();
                            move |_| editing.set(Some(EventForm::from(row.clone())))
                        },
                        "Editează"
                    }
                    button {
                        class: "btn btn-sm btn-error",
                        onclick: {
                            let id = row.id;
                            move |_| {
                                spawn(async move {
                                    match admin_delete_event(id).await {
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
            EventEditor {
                form,
                on_save: save,
                on_close: move |_| editing.set(None),
            }
        }
    }
}

#[component]
fn EventEditor(form: EventForm, on_save: EventHandler<EventForm>, on_close: EventHandler<()>) -> Element {
    let mut draft = use_signal(|| form.clone());
    let current = draft();
    let title = if current.id.is_some() { "Editează eveniment" } else { "Eveniment nou" };

    rsx! {
        Modal { title: title.to_string(), on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-2",
                TextInput {
                    label: "Titlu",
                    value: Some(current.title.clone()),
                    on_change: move |value: Option<String>| draft.write().title = value.unwrap_or_default(),
                }
                TextArea {
                    label: "Descriere",
                    value: current.description.clone(),
                    on_change: move |value| draft.write().description = value,
                }
                TextInput {
                    label: "Locație",
                    value: current.location.clone(),
                    on_change: move |value| draft.write().location = value,
                }
                ImageInput {
                    value: current.image_url.clone(),
                    on_change: move |value| draft.write().image_url = value,
                }
                div { class: "grid grid-cols-2 gap-2",
                    TextInput {
                        label: "Data",
                        kind: "date",
                        value: current.date.clone(),
                        on_change: move |value| draft.write().date = value,
                    }
                    TextInput {
                        label: "Data sfârșit",
                        kind: "date",
                        value: current.end_date.clone(),
                        on_change: move |value| draft.write().end_date = value,
                    }
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
