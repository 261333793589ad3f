//! Inputs shared by the content editors.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    store::error::ErrorState,
    util::{api::admin_upload_image, file::read_picked_file},
};

/// Optional text input, an empty value is sent as `None`
#[component]
pub fn TextInput(
    label: &'static str,
    value: Option<String>,
    #[props(default = "text")] kind: &'static str,
    on_change: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        label { class: "form-control w-full",
            span { class: "label-text text-xs", "{label}" }
            input {
                class: "input input-bordered input-sm w-full",
                r#type: kind,
                value: value.unwrap_or_default(),
                oninput: move |evt| {
                    let value = evt.value();
                    on_change.call(if value.is_empty() { None } else { Some(value) });
                },
            }
        }
    }
}

#[component]
pub fn TextArea(label: &'static str, value: Option<String>, on_change: EventHandler<Option<String>>) -> Element {
    rsx! {
        label { class: "form-control w-full",
            span { class: "label-text text-xs", "{label}" }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: 4,
                value: value.unwrap_or_default(),
                oninput: move |evt| {
                    let value = evt.value();
                    on_change.call(if value.is_empty() { None } else { Some(value) });
                },
            }
        }
    }
}

/// Active checkbox, unset counts as active
#[component]
pub fn ActiveToggle(value: Option<bool>, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "label cursor-pointer justify-start gap-2",
            input {
                r#type: "checkbox",
                class: "checkbox checkbox-sm",
                checked: value != Some(false),
                onchange: move |evt| on_change.call(evt.checked()),
            }
            span { class: "label-text", "Activ" }
        }
    }
}

/// Uploads a picked image to the content bucket and reports its public URL
#[component]
pub fn ImageInput(value: Option<String>, on_change: EventHandler<Option<String>>) -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut uploading = use_signal(|| false);

    let pick = move |evt: FormEvent| async move {
        let picked = match read_picked_file(&evt).await {
            Ok(Some(picked)) => picked,
            Ok(None) => return,
            Err(err) => {
                error_store.write().show(err);
                return;
            }
        };

        uploading.set(true);
        match admin_upload_image(&picked).await {
            Ok(url) => on_change.call(Some(url)),
            Err(err) => {
                tracing::error!("Failed to upload image: {}", err);
                error_store.write().show(err);
            }
        }
        uploading.set(false);
    };

    rsx! {
        div { class: "flex flex-col gap-2",
            span { class: "label-text text-xs", "Imagine" }
            if let Some(url) = &value {
                img { class: "h-32 w-full object-cover rounded", src: "{url}", alt: "Imagine" }
            }
            div { class: "flex gap-2 items-center",
                input {
                    class: "file-input file-input-bordered file-input-sm w-full",
                    r#type: "file",
                    accept: "image/*",
                    disabled: uploading(),
                    onchange: pick,
                }
                if value.is_some() {
                    button {
                        class: "btn btn-sm btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_change.call(None),
                        "Elimină"
                    }
                }
            }
        }
    }
}
