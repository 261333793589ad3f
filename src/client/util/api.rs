//! Typed calls to the ConsulaRO API.
//!
//! Requests go through `reqwasm` with the session cookie included. Outside of the web build
//! every call fails with a network error, views only issue requests from effects and event
//! handlers so server-side rendering never reaches them.

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::model::{
    api::{ErrorDto, ErrorKind, MaintenanceSqlDto, UploadedUrlDto},
    auth::{SignInDto, SignUpDto, SignUpResultDto},
    content::{AlertDto, AlertForm, AnnouncementDto, AnnouncementForm, EventDto, EventForm},
    document::UserDocumentDto,
    user::{ProfileUpdateDto, Role, UpdateRoleDto, UserProfileDto},
};

/// A failed API request as shown to the user
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub kind: ErrorKind,
    pub maintenance_hint: bool,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Network,
            maintenance_hint: false,
        }
    }

    /// Error for a response whose body is not an `ErrorDto`
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            401 | 403 => ErrorKind::Auth,
            400 | 404 | 409 | 422 => ErrorKind::Validation,
            _ => ErrorKind::Unknown,
        };
        let message = if body.trim().is_empty() {
            format!("Request failed with status {}", status)
        } else {
            format!("Request failed with status {}: {}", status, body.trim())
        };

        Self {
            message,
            kind,
            maintenance_hint: false,
        }
    }
}

impl From<ErrorDto> for ApiError {
    fn from(dto: ErrorDto) -> Self {
        Self {
            message: dto.error,
            kind: dto.kind,
            maintenance_hint: dto.maintenance_hint,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A file chosen with the file picker, read into memory
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
}

#[cfg(feature = "web")]
mod transport {
    use reqwasm::http::{Request, RequestCredentials, Response};
    use serde::{de::DeserializeOwned, Serialize};

    use super::{ApiError, Method, PickedFile};
    use crate::model::api::ErrorDto;

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorDto>(&body) {
            Ok(dto) => ApiError::from(dto),
            Err(_) => ApiError::from_status(status, &body),
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(error_from(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::network(format!("Failed to parse response: {}", e)))
    }

    async fn send(request: Request) -> Result<Response, ApiError> {
        request
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))
    }

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
        parse(send(Request::get(url)).await?).await
    }

    /// Like [`get_json`] but a 404 answers `None`
    pub async fn get_optional<T: DeserializeOwned>(url: &str) -> Result<Option<T>, ApiError> {
        let response = send(Request::get(url)).await?;
        if response.status() == 404 {
            return Ok(None);
        }

        parse(response).await.map(Some)
    }

    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::network(format!("Failed to encode request: {}", e)))?;
        let request = match method {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
        };

        let response = send(request.header("Content-Type", "application/json").body(body)).await?;

        parse(response).await
    }

    pub async fn delete(url: &str) -> Result<(), ApiError> {
        let response = send(Request::delete(url)).await?;
        if !response.ok() {
            return Err(error_from(response).await);
        }

        Ok(())
    }

    pub async fn get_unit(url: &str) -> Result<(), ApiError> {
        let response = send(Request::get(url)).await?;
        if !response.ok() {
            return Err(error_from(response).await);
        }

        Ok(())
    }

    pub async fn upload<T: DeserializeOwned>(
        url: &str,
        file: &PickedFile,
        message: Option<&str>,
    ) -> Result<T, ApiError> {
        use web_sys::{Blob, BlobPropertyBag, FormData};

        let js_error = |e: web_sys::wasm_bindgen::JsValue| {
            ApiError::network(format!("Failed to prepare upload: {:?}", e))
        };

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;

        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", &blob, &file.name)
            .map_err(js_error)?;
        if let Some(message) = message {
            form.append_with_str("message", message).map_err(js_error)?;
        }

        parse(send(Request::post(url).body(form)).await?).await
    }
}

#[cfg(not(feature = "web"))]
mod transport {
    use serde::{de::DeserializeOwned, Serialize};

    use super::{ApiError, Method, PickedFile};

    fn unavailable() -> ApiError {
        ApiError::network("The API is only reachable from the browser")
    }

    pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn get_optional<T: DeserializeOwned>(_url: &str) -> Result<Option<T>, ApiError> {
        Err(unavailable())
    }

    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        _method: Method,
        _url: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn delete(_url: &str) -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn get_unit(_url: &str) -> Result<(), ApiError> {
        Err(unavailable())
    }

    pub async fn upload<T: DeserializeOwned>(
        _url: &str,
        _file: &PickedFile,
        _message: Option<&str>,
    ) -> Result<T, ApiError> {
        Err(unavailable())
    }
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    transport::send_json(Method::Post, url, body).await
}

// Auth

/// Profile of the signed-in user, `None` for anonymous visitors
pub async fn get_session() -> Result<Option<UserProfileDto>, ApiError> {
    transport::get_optional("/api/auth/session").await
}

pub async fn sign_in(dto: &SignInDto) -> Result<UserProfileDto, ApiError> {
    post_json("/api/auth/signin", dto).await
}

pub async fn sign_up(dto: &SignUpDto) -> Result<SignUpResultDto, ApiError> {
    post_json("/api/auth/signup", dto).await
}

pub async fn sign_out() -> Result<(), ApiError> {
    transport::get_unit("/api/auth/logout").await
}

/// Path that starts the OAuth flow, navigated to rather than fetched
pub fn oauth_login_path(provider: &str) -> String {
    format!("/api/auth/oauth/{}", provider)
}

// Content

pub async fn get_announcements() -> Result<Vec<AnnouncementDto>, ApiError> {
    transport::get_json("/api/content/announcements").await
}

pub async fn get_events() -> Result<Vec<EventDto>, ApiError> {
    transport::get_json("/api/content/events").await
}

pub async fn get_alerts() -> Result<Vec<AlertDto>, ApiError> {
    transport::get_json("/api/content/alerts").await
}

// Profile & documents

pub async fn save_profile(update: &ProfileUpdateDto) -> Result<UserProfileDto, ApiError> {
    transport::send_json(Method::Put, "/api/profile", update).await
}

pub async fn upload_avatar(file: &PickedFile) -> Result<String, ApiError> {
    let uploaded: UploadedUrlDto = transport::upload("/api/profile/avatar", file, None).await?;

    Ok(uploaded.url)
}

pub async fn delete_account() -> Result<(), ApiError> {
    transport::delete("/api/profile").await
}

pub async fn get_my_documents() -> Result<Vec<UserDocumentDto>, ApiError> {
    transport::get_json("/api/documents").await
}

pub async fn submit_document(
    file: &PickedFile,
    message: Option<&str>,
) -> Result<UserDocumentDto, ApiError> {
    transport::upload("/api/documents", file, message).await
}

// Admin

pub async fn admin_get_users() -> Result<Vec<UserProfileDto>, ApiError> {
    transport::get_json("/api/admin/users").await
}

pub async fn admin_update_role(user_id: Uuid, role: Role) -> Result<UserProfileDto, ApiError> {
    transport::send_json(
        Method::Put,
        &format!("/api/admin/users/{}/role", user_id),
        &UpdateRoleDto { role },
    )
    .await
}

pub async fn admin_get_announcements() -> Result<Vec<AnnouncementDto>, ApiError> {
    transport::get_json("/api/admin/announcements").await
}

pub async fn admin_save_announcement(form: &AnnouncementForm) -> Result<AnnouncementDto, ApiError> {
    post_json("/api/admin/announcements", form).await
}

pub async fn admin_delete_announcement(id: Uuid) -> Result<(), ApiError> {
    transport::delete(&format!("/api/admin/announcements/{}", id)).await
}

pub async fn admin_get_events() -> Result<Vec<EventDto>, ApiError> {
    transport::get_json("/api/admin/events").await
}

pub async fn admin_save_event(form: &EventForm) -> Result<EventDto, ApiError> {
    post_json("/api/admin/events", form).await
}

pub async fn admin_delete_event(id: Uuid) -> Result<(), ApiError> {
    transport::delete(&format!("/api/admin/events/{}", id)).await
}

pub async fn admin_get_alerts() -> Result<Vec<AlertDto>, ApiError> {
    transport::get_json("/api/admin/alerts").await
}

pub async fn admin_save_alert(form: &AlertForm) -> Result<AlertDto, ApiError> {
    post_json("/api/admin/alerts", form).await
}

pub async fn admin_delete_alert(id: Uuid) -> Result<(), ApiError> {
    transport::delete(&format!("/api/admin/alerts/{}", id)).await
}

pub async fn admin_get_documents() -> Result<Vec<UserDocumentDto>, ApiError> {
    transport::get_json("/api/admin/documents").await
}

pub async fn admin_upload_image(file: &PickedFile) -> Result<String, ApiError> {
    let uploaded: UploadedUrlDto = transport::upload("/api/admin/images", file, None).await?;

    Ok(uploaded.url)
}

pub async fn admin_get_maintenance_sql() -> Result<String, ApiError> {
    let dto: MaintenanceSqlDto = transport::get_json("/api/admin/maintenance-sql").await?;

    Ok(dto.sql)
}
