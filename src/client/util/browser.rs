//! Browser APIs used by the views: camera capture and clipboard writes.
//!
//! Outside the browser every call fails with a network-kind [`ApiError`].

use crate::client::util::api::{ApiError, PickedFile};

pub use imp::{capture_frame, start_camera, write_clipboard, CameraStream};

/// File name given to photos taken with the camera
pub const CAPTURE_FILE_NAME: &str = "fotografie.jpg";

#[cfg_attr(not(feature = "web"), allow(dead_code))]
const CAPTURE_TYPE: &str = "image/jpeg";

/// Splits a `data:<type>;base64,<payload>` URL into its content type and payload
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn split_data_url(url: &str) -> Option<(&str, &str)> {
    let (header, payload) = url.strip_prefix("data:")?.split_once(',')?;
    let content_type = header.strip_suffix(";base64")?;

    Some((content_type, payload))
}

/// Bytes of a binary string as returned by `atob`, each char holds one byte
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn binary_string_bytes(binary: &str) -> Vec<u8> {
    binary.chars().map(|c| c as u32 as u8).collect()
}

#[cfg(feature = "web")]
mod imp {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        wasm_bindgen::{JsCast, JsValue},
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
        MediaStreamConstraints, MediaStreamTrack, Window,
    };

    use super::{
        binary_string_bytes, split_data_url, ApiError, PickedFile, CAPTURE_FILE_NAME,
        CAPTURE_TYPE,
    };

    /// An open camera stream, its tracks keep running until [`CameraStream::stop`]
    pub struct CameraStream(MediaStream);

    impl CameraStream {
        pub fn stop(&self) {
            for track in self.0.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }

    fn browser_error(action: &'static str) -> impl Fn(JsValue) -> ApiError {
        move |e| ApiError::network(format!("{}: {:?}", action, e))
    }

    fn window() -> Result<Window, ApiError> {
        web_sys::window().ok_or_else(|| ApiError::network("No browser window"))
    }

    fn video_element(video_id: &str) -> Result<HtmlVideoElement, ApiError> {
        window()?
            .document()
            .and_then(|document| document.get_element_by_id(video_id))
            .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok())
            .ok_or_else(|| ApiError::network("Camera preview is not on the page"))
    }

    /// Opens the rear camera and plays it in the `<video>` element with id `video_id`
    pub async fn start_camera(video_id: &str) -> Result<CameraStream, ApiError> {
        let failed = browser_error("Camera unavailable");
        let video = video_element(video_id)?;
        let devices = window()?.navigator().media_devices().map_err(&failed)?;

        let facing = js_sys::Object::new();
        js_sys::Reflect::set(&facing, &"facingMode".into(), &"environment".into())
            .map_err(&failed)?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::from(facing));
        constraints.set_audio(&JsValue::FALSE);

        let request = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(&failed)?;
        let stream = JsFuture::from(request)
            .await
            .map_err(&failed)?
            .dyn_into::<MediaStream>()
            .map_err(&failed)?;

        video.set_src_object(Some(&stream));
        let stream = CameraStream(stream);
        match video.play() {
            Ok(playing) => {
                if let Err(e) = JsFuture::from(playing).await {
                    stream.stop();
                    return Err(failed(e));
                }
            }
            Err(e) => {
                stream.stop();
                return Err(failed(e));
            }
        }

        Ok(stream)
    }

    /// Grabs the current frame of the `<video>` element with id `video_id` as a JPEG
    pub fn capture_frame(video_id: &str) -> Result<PickedFile, ApiError> {
        let failed = browser_error("Failed to take the photo");
        let video = video_element(video_id)?;

        let (width, height) = (video.video_width(), video.video_height());
        if width == 0 || height == 0 {
            return Err(ApiError::network("The camera is not ready yet"));
        }

        let window = window()?;
        let canvas = window
            .document()
            .ok_or_else(|| ApiError::network("No document"))?
            .create_element("canvas")
            .map_err(&failed)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|element| failed(element.into()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(&failed)?
            .ok_or_else(|| ApiError::network("Canvas drawing is not supported"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|context| failed(context.into()))?;
        context
            .draw_image_with_html_video_element(&video, 0.0, 0.0)
            .map_err(&failed)?;

        let data_url = canvas.to_data_url_with_type(CAPTURE_TYPE).map_err(&failed)?;
        let (content_type, payload) = split_data_url(&data_url)
            .ok_or_else(|| ApiError::network("Unexpected image data from the camera"))?;
        let binary = window.atob(payload).map_err(&failed)?;

        Ok(PickedFile {
            name: CAPTURE_FILE_NAME.to_string(),
            content_type: content_type.to_string(),
            bytes: binary_string_bytes(&binary),
        })
    }

    pub async fn write_clipboard(text: &str) -> Result<(), ApiError> {
        let clipboard = window()?.navigator().clipboard();

        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(browser_error("Failed to copy to the clipboard"))?;

        Ok(())
    }
}

#[cfg(not(feature = "web"))]
mod imp {
    use super::{ApiError, PickedFile};

    pub struct CameraStream;

    impl CameraStream {
        pub fn stop(&self) {}
    }

    fn unavailable() -> ApiError {
        ApiError::network("This feature is only available in the browser")
    }

    pub async fn start_camera(_video_id: &str) -> Result<CameraStream, ApiError> {
        Err(unavailable())
    }

    pub fn capture_frame(_video_id: &str) -> Result<PickedFile, ApiError> {
        Err(unavailable())
    }

    pub async fn write_clipboard(_text: &str) -> Result<(), ApiError> {
        Err(unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_base64_data_url() {
        assert_eq!(
            split_data_url("data:image/jpeg;base64,/9j/4AAQ"),
            Some(("image/jpeg", "/9j/4AAQ"))
        );
        assert_eq!(split_data_url("data:,"), None);
        assert_eq!(split_data_url("https://example.com/a.jpg"), None);
    }

    #[test]
    fn keeps_every_byte_of_binary_string() {
        let binary: String = [0xFFu8, 0xD8, 0x00, 0x7F].iter().map(|b| *b as char).collect();

        assert_eq!(binary_string_bytes(&binary), vec![0xFF, 0xD8, 0x00, 0x7F]);
    }
}
