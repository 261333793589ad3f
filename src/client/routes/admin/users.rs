use dioxus::prelude::*;
use dioxus_logger::tracing;
use uuid::Uuid;

use crate::{
    client::{
        store::{error::ErrorState, user::UserState},
        util::api::{admin_get_users, admin_update_role},
    },
    model::user::{Role, UserProfileDto},
};

const ROLES: [(Role, &str); 3] = [
    (Role::User, "Utilizator"),
    (Role::Admin, "Administrator"),
    (Role::SuperAdmin, "Super administrator"),
];

#[component]
pub fn UsersAdmin() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut rows = use_signal(Vec::<UserProfileDto>::new);

    use_effect(move || {
        spawn(async move {
            match admin_get_users().await {
                Ok(list) => rows.set(list),
                Err(err) => {
                    tracing::error!("Failed to load users: {}", err);
                    error_store.write().show(err);
                }
            }
        });
    });

    let change_role = move |user_id: Uuid, role: Role| {
        spawn(async move {
            match admin_update_role(user_id, role).await {
                Ok(updated) => {
                    if let Some(row) = rows.write().iter_mut().find(|row| row.id == updated.id) {
                        *row = updated;
                    }
                }
                Err(err) => error_store.write().show(err),
            }
        });
    };

    let acting_role = user_store
        .read()
        .user
        .as_ref()
        .map(|user| user.role)
        .unwrap_or_default();

    rsx! {
        div { class: "flex flex-col gap-2",
            for row in rows() {
                div { key: "{row.id}", class: "flex items-center gap-3 p-3 rounded-lg bg-base-100 shadow-sm",
                    div { class: "flex-1 min-w-0",
                        p { class: "font-semibold truncate", "{row.display_name()}" }
                        p { class: "text-xs opacity-60 truncate", {row.email.clone().unwrap_or_default()} }
                    }
                    select {
                        class: "select select-bordered select-sm",
                        value: row.role.as_str(),
                        // Only a super administrator may touch super administrators
                        disabled: row.role == Role::SuperAdmin && acting_role != Role::SuperAdmin,
                        onchange: {
                            let user_id = row.id;
                            move |evt: FormEvent| change_role(user_id, Role::from_db(&evt.value()))
                        },
                        for (role, label) in ROLES {
                            option {
                                value: role.as_str(),
                                disabled: role == Role::SuperAdmin && acting_role != Role::SuperAdmin,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
