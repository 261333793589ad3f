use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCamera, FaFileImage, FaFilePdf};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{CameraCapture, Page},
        router::Route,
        store::{error::ErrorState, user::UserState},
        util::{
            api::{get_my_documents, submit_document, PickedFile},
            file::read_picked_file,
        },
    },
    model::document::{FileType, UserDocumentDto},
};

/// Shown in place of a view that needs a signed-in user
#[component]
pub fn SignInRequired() -> Element {
    rsx! {
        Page { class: "flex flex-col items-center justify-center gap-4 text-center",
            p { "Te rugăm să te autentifici." }
            Link { to: Route::Auth {}, class: "btn btn-primary", "Autentificare" }
        }
    }
}

#[component]
pub fn SendDocs() -> Element {
    let user_store = use_context::<Store<UserState>>();

    if user_store.read().user.is_none() {
        if !user_store.read().fetched {
            return rsx! { Page { span { class: "loading loading-spinner" } } };
        }
        return rsx! { SignInRequired {} };
    }

    rsx! {
        document::Title { "Trimite documente | ConsulaRO" }
        Page { class: "flex flex-col gap-6",
            h2 { class: "text-2xl font-bold text-primary", "Trimite documente" }
            DocumentUpload {}
        }
    }
}

#[component]
fn DocumentUpload() -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();

    let mut documents = use_signal(Vec::<UserDocumentDto>::new);
    let mut file = use_signal(|| None::<PickedFile>);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut camera_open = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match get_my_documents().await {
                Ok(rows) => documents.set(rows),
                Err(err) => {
                    tracing::error!("Failed to load documents: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    let pick = move |evt: FormEvent| async move {
        match read_picked_file(&evt).await {
            Ok(picked) => file.set(picked),
            Err(err) => error_store.write().show(err),
        }
    };

    let send = move |_| {
        let Some(picked) = file() else {
            return;
        };
        sending.set(true);

        spawn(async move {
            let note = message();
            let note = Some(note.trim()).filter(|note| !note.is_empty());

            match submit_document(&picked, note).await {
                Ok(document) => {
                    tracing::info!("Submitted document {}", document.file_name);
                    documents.write().insert(0, document);
                    file.set(None);
                    message.set(String::new());
                }
                Err(err) => {
                    tracing::error!("Failed to submit document: {}", err);
                    error_store.write().show(err);
                }
            }

            sending.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body gap-3",
                p { class: "text-sm opacity-70",
                    "Încărcați documentele (imagini sau PDF) pentru verificare preliminară de către consulat."
                }
                input {
                    class: "file-input file-input-bordered w-full",
                    r#type: "file",
                    accept: "image/*,application/pdf",
                    onchange: pick,
                }
                if camera_open() {
                    CameraCapture {
                        video_id: "document-camera",
                        on_capture: move |photo| {
                            file.set(Some(photo));
                            camera_open.set(false);
                        },
                        on_close: move |_| camera_open.set(false),
                    }
                } else {
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| camera_open.set(true),
                        Icon { width: 16, height: 16, icon: FaCamera }
                        "Fotografiază documentul"
                    }
                }
                if let Some(picked) = file() {
                    p { class: "text-sm", "Fișier selectat: {picked.name}" }
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Mesaj (opțional)",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: file.read().is_none() || sending(),
                    onclick: send,
                    if sending() { span { class: "loading loading-spinner" } }
                    "Trimite"
                }
            }
        }

        section { class: "flex flex-col gap-2",
            h3 { class: "font-bold text-lg", "Documentele mele" }
            if documents.read().is_empty() {
                p { class: "text-sm italic opacity-60", "Nu ați trimis încă niciun document." }
            }
            for document in documents() {
                DocumentRow { key: "{document.id}", document: document.clone() }
            }
        }
    }
}

#[component]
pub fn DocumentRow(document: UserDocumentDto) -> Element {
    let sent = document.created_at.format("%d.%m.%Y %H:%M").to_string();

    rsx! {
        a {
            class: "flex items-center gap-3 p-3 rounded-lg bg-base-100 shadow-sm",
            href: "{document.file_url}",
            target: "_blank",
            rel: "noopener noreferrer",
            match document.file_type {
                FileType::Image => rsx! { Icon { width: 20, height: 20, icon: FaFileImage } },
                FileType::Pdf => rsx! { Icon { width: 20, height: 20, icon: FaFilePdf } },
            }
            div { class: "flex-1 min-w-0",
                p { class: "font-semibold text-sm truncate", "{document.file_name}" }
                if let Some(message) = &document.message {
                    p { class: "text-xs opacity-70 line-clamp-2", "{message}" }
                }
            }
            span { class: "text-xs opacity-60", "{sent}" }
        }
    }
}
