use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        routes::send_docs::DocumentRow, store::error::ErrorState,
        util::api::admin_get_documents,
    },
    model::document::UserDocumentDto,
};

/// Every submitted document, newest first, with its submitter
#[component]
pub fn DocumentsAdmin() -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut rows = use_signal(Vec::<UserDocumentDto>::new);

    use_effect(move || {
        spawn(async move {
            match admin_get_documents().await {
                Ok(list) => rows.set(list),
                Err(err) => {
                    tracing::error!("Failed to load documents: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    rsx! {
        div { class: "flex flex-col gap-2",
            if rows.read().is_empty() {
                p { class: "text-sm italic opacity-60", "Nu există documente trimise." }
            }
            for document in rows() {
                div { key: "{document.id}", class: "flex flex-col gap-1",
                    p { class: "text-xs opacity-70",
                        {
                            [document.user_name.clone(), document.user_email.clone()]
                                .into_iter()
                                .flatten()
                                .collect::<Vec<_>>()
                                .join(" · ")
                        }
                    }
                    DocumentRow { document: document.clone() }
                }
            }
        }
    }
}
