use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCamera, FaRightFromBracket, FaShieldHalved, FaUser,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{CameraCapture, Modal, Page},
        router::Route,
        routes::send_docs::SignInRequired,
        store::{error::ErrorState, user::UserState},
        util::{
            api::{delete_account, save_profile, sign_out, upload_avatar, PickedFile},
            file::read_picked_file,
        },
    },
    model::user::{ProfileUpdateDto, UserProfileDto},
};

fn update_from(profile: &UserProfileDto) -> ProfileUpdateDto {
    ProfileUpdateDto {
        first_name: profile.first_name.clone(),
        last_name: profile.last_name.clone(),
        phone: profile.phone.clone(),
        address: profile.address.clone(),
        city: profile.city.clone(),
        county: profile.county.clone(),
        country: profile.country.clone(),
        post_code: profile.post_code.clone(),
        username: profile.username.clone(),
        avatar_url: profile.avatar_url.clone(),
    }
}

#[component]
pub fn Profile() -> Element {
    let user_store = use_context::<Store<UserState>>();

    let Some(profile) = user_store.read().user.clone() else {
        if !user_store.read().fetched {
            return rsx! { Page { span { class: "loading loading-spinner" } } };
        }
        return rsx! { SignInRequired {} };
    };

    rsx! {
        document::Title { "Profil | ConsulaRO" }
        ProfileEditor { key: "{profile.id}", profile: profile.clone() }
    }
}

/// Single text input bound to one optional profile field
#[component]
fn ProfileField(
    label: &'static str,
    value: Option<String>,
    on_change: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        label { class: "form-control w-full",
            span { class: "label-text text-xs", "{label}" }
            input {
                class: "input input-bordered input-sm w-full",
                value: value.unwrap_or_default(),
                oninput: move |evt| on_change.call(Some(evt.value())),
            }
        }
    }
}

#[component]
fn ProfileEditor(profile: UserProfileDto) -> Element {
    let mut user_store = use_context::<Store<UserState>>();
    let mut error_store = use_context::<Store<ErrorState>>();
    let navigator = use_navigator();

    let mut form = use_signal(|| update_from(&profile));
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);
    let mut saved = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut camera_open = use_signal(|| false);

    let save = move |_| {
        saving.set(true);
        saved.set(false);
        spawn(async move {
            match save_profile(&form()).await {
                Ok(updated) => {
                    form.set(update_from(&updated));
                    user_store.write().user = Some(updated);
                    saved.set(true);
                }
                Err(err) => {
                    tracing::error!("Failed to save profile: {}", err);
                    error_store.write().show(err);
                }
            }
            saving.set(false);
        });
    };

    // The returned URL is kept in the form and persisted by the next save
    let upload_picked = move |picked: PickedFile| {
        spawn(async move {
            uploading.set(true);
            match upload_avatar(&picked).await {
                Ok(url) => form.write().avatar_url = Some(url),
                Err(err) => {
                    tracing::error!("Failed to upload avatar: {}", err);
                    error_store.write().show(err);
                }
            }
            uploading.set(false);
        });
    };

    let pick_avatar = move |evt: FormEvent| async move {
        match read_picked_file(&evt).await {
            Ok(Some(picked)) => {
                upload_picked(picked);
            }
            Ok(None) => {}
            Err(err) => error_store.write().show(err),
        }
    };

    let logout = move |_| {
        spawn(async move {
            if let Err(err) = sign_out().await {
                tracing::warn!("Logout request failed: {}", err);
            }
            user_store.write().user = None;
            navigator.replace(Route::Auth {});
        });
    };

    let remove_account = move |_| {
        spawn(async move {
            match delete_account().await {
                Ok(()) => {
                    user_store.write().user = None;
                    navigator.replace(Route::Auth {});
                }
                Err(err) => {
                    tracing::error!("Failed to delete account: {}", err);
                    confirm_delete.set(false);
                    error_store.write().show(err);
                }
            }
        });
    };

    let current = form();

    rsx! {
        Page { class: "flex flex-col gap-4",
            div { class: "flex flex-col items-center gap-2",
                div { class: "avatar",
                    div { class: "w-24 rounded-full bg-base-200 flex items-center justify-center",
                        if let Some(url) = &current.avatar_url {
                            img { src: "{url}", alt: "Avatar" }
                        } else {
                            Icon { width: 48, height: 48, icon: FaUser }
                        }
                    }
                }
                label { class: "btn btn-sm btn-outline",
                    if uploading() { span { class: "loading loading-spinner loading-xs" } }
                    "Schimbă poza"
                    input {
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: pick_avatar,
                    }
                }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| camera_open.set(true),
                    Icon { width: 16, height: 16, icon: FaCamera }
                    "Fă o poză"
                }
                if let Some(email) = &profile.email {
                    p { class: "text-sm opacity-70", "{email}" }
                }
            }

            div { class: "grid grid-cols-2 gap-2",
                ProfileField {
                    label: "Prenume",
                    value: current.first_name.clone(),
                    on_change: move |value| form.write().first_name = value,
                }
                ProfileField {
                    label: "Nume",
                    value: current.last_name.clone(),
                    on_change: move |value| form.write().last_name = value,
                }
                ProfileField {
                    label: "Nume utilizator",
                    value: current.username.clone(),
                    on_change: move |value| form.write().username = value,
                }
                ProfileField {
                    label: "Telefon",
                    value: current.phone.clone(),
                    on_change: move |value| form.write().phone = value,
                }
            }
            ProfileField {
                label: "Adresă",
                value: current.address.clone(),
                on_change: move |value| form.write().address = value,
            }
            div { class: "grid grid-cols-2 gap-2",
                ProfileField {
                    label: "Oraș",
                    value: current.city.clone(),
                    on_change: move |value| form.write().city = value,
                }
                ProfileField {
                    label: "Județ / Regiune",
                    value: current.county.clone(),
                    on_change: move |value| form.write().county = value,
                }
                ProfileField {
                    label: "Țară",
                    value: current.country.clone(),
                    on_change: move |value| form.write().country = value,
                }
                ProfileField {
                    label: "Cod poștal",
                    value: current.post_code.clone(),
                    on_change: move |value| form.write().post_code = value,
                }
            }

            button { class: "btn btn-primary", disabled: saving(), onclick: save,
                if saving() { span { class: "loading loading-spinner" } }
                "Salvează"
            }
            if saved() {
                p { class: "text-success text-sm text-center", "Profil salvat." }
            }

            if profile.role.is_admin() {
                Link { to: Route::Admin {}, class: "btn btn-secondary",
                    Icon { width: 16, height: 16, icon: FaShieldHalved }
                    "Panou administrare"
                }
            }
            Link { to: Route::SendDocs {}, class: "btn btn-outline", "Trimite documente" }
            button { class: "btn btn-outline", onclick: logout,
                Icon { width: 16, height: 16, icon: FaRightFromBracket }
                "Deconectare"
            }
            button {
                class: "btn btn-ghost text-error",
                onclick: move |_| confirm_delete.set(true),
                "Șterge contul"
            }
        }

        if camera_open() {
            Modal {
                title: "Poză de profil",
                on_close: move |_| camera_open.set(false),
                CameraCapture {
                    video_id: "avatar-camera",
                    on_capture: move |photo| {
                        camera_open.set(false);
                        upload_picked(photo);
                    },
                    on_close: move |_| camera_open.set(false),
                }
            }
        }

        if confirm_delete() {
            Modal {
                title: "Ștergere cont",
                on_close: move |_| confirm_delete.set(false),
                div { class: "flex flex-col gap-4",
                    p {
                        "Contul și profilul vor fi șterse definitiv. Documentele trimise rămân la consulat."
                    }
                    div { class: "flex justify-end gap-2",
                        button { class: "btn", onclick: move |_| confirm_delete.set(false), "Anulează" }
                        button { class: "btn btn-error", onclick: remove_account, "Șterge" }
                    }
                }
            }
        }
    }
}
