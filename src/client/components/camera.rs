use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCamera;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    store::error::ErrorState,
    util::{
        api::PickedFile,
        browser::{capture_frame, start_camera, CameraStream},
    },
};

/// Live camera preview with a shutter button
///
/// The camera is released when the component is removed, including when the stream
/// finishes opening after that.
#[component]
pub fn CameraCapture(
    video_id: &'static str,
    on_capture: EventHandler<PickedFile>,
    on_close: EventHandler<()>,
) -> Element {
    let mut error_store = use_context::<Store<ErrorState>>();
    let mut ready = use_signal(|| false);
    let stream = use_hook(|| Rc::new(RefCell::new(None::<CameraStream>)));
    let closed = use_hook(|| Rc::new(Cell::new(false)));

    use_effect({
        let stream = stream.clone();
        let closed = closed.clone();
        move || {
            let stream = stream.clone();
            let closed = closed.clone();
            spawn(async move {
                match start_camera(video_id).await {
                    Ok(started) if closed.get() => started.stop(),
                    Ok(started) => {
                        stream.replace(Some(started));
                        ready.set(true);
                    }
                    Err(err) => {
                        tracing::error!("Failed to start camera: {}", err);
                        error_store.write().show(err);
                        on_close.call(());
                    }
                }
            });
        }
    });

    use_drop(move || {
        closed.set(true);
        if let Some(stream) = stream.borrow_mut().take() {
            stream.stop();
        }
    });

    let shoot = move |_| match capture_frame(video_id) {
        Ok(photo) => on_capture.call(photo),
        Err(err) => {
            tracing::error!("Failed to capture photo: {}", err);
            error_store.write().show(err);
        }
    };

    rsx! {
        div { class: "flex flex-col gap-2",
            video {
                id: video_id,
                class: "w-full rounded-lg bg-black",
                autoplay: true,
                muted: true,
                "playsinline": "true",
            }
            div { class: "flex gap-2",
                button { class: "btn btn-primary flex-1", disabled: !ready(), onclick: shoot,
                    Icon { width: 16, height: 16, icon: FaCamera }
                    "Fotografiază"
                }
                button { class: "btn", onclick: move |_| on_close.call(()), "Închide" }
            }
        }
    }
}
