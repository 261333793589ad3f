//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call so utoipa-axum merges their
/// methods onto a single route. The OpenAPI specification is available at
/// `/api/docs/openapi.json`.
///
/// The avatar, document and image upload routes accept bodies up to `max_upload_bytes`,
/// every other route keeps axum's default limit.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given state, layered with the session manager and
/// merged into the Dioxus router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, storage, oauth, auth };
/// let router = routes(config.max_upload_bytes).with_state(app_state);
/// ```
pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "ConsulaRO", description = "ConsulaRO API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Sign-up, sign-in and session routes"),
        (name = controller::content::CONTENT_TAG, description = "Public announcements, events and alerts"),
        (name = controller::profile::PROFILE_TAG, description = "Signed-in user's profile and account"),
        (name = controller::document::DOCUMENT_TAG, description = "Document submission"),
        (name = controller::admin::ADMIN_TAG, description = "Administrator routes"),
    ))]
    struct ApiDoc;

    let uploads = OpenApiRouter::<AppState>::new()
        .routes(routes!(controller::profile::upload_avatar))
        .routes(routes!(
            controller::document::get_documents,
            controller::document::submit_document
        ))
        .routes(routes!(controller::admin::upload_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::sign_up))
        .routes(routes!(controller::auth::sign_in))
        .routes(routes!(controller::auth::confirm))
        .routes(routes!(controller::auth::oauth_login))
        .routes(routes!(controller::auth::oauth_callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::content::get_announcements))
        .routes(routes!(controller::content::get_events))
        .routes(routes!(controller::content::get_alerts))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::save_profile,
            controller::profile::delete_account
        ))
        .routes(routes!(controller::admin::get_users))
        .routes(routes!(controller::admin::update_user_role))
        .routes(routes!(
            controller::admin::get_announcements,
            controller::admin::save_announcement
        ))
        .routes(routes!(controller::admin::delete_announcement))
        .routes(routes!(
            controller::admin::get_events,
            controller::admin::save_event
        ))
        .routes(routes!(controller::admin::delete_event))
        .routes(routes!(
            controller::admin::get_alerts,
            controller::admin::save_alert
        ))
        .routes(routes!(controller::admin::delete_alert))
        .routes(routes!(controller::admin::get_documents))
        .routes(routes!(controller::admin::get_maintenance_sql))
        .merge(uploads)
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
