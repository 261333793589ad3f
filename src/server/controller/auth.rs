use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SignInDto, SignUpDto, SignUpResultDto},
        user::UserProfileDto,
    },
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_profile_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{
                auth::{SessionAuthCsrf, SessionAuthPkce},
                user::SessionUserId,
            },
        },
        service::auth::{oauth::ProviderKind, AuthService, SignUpOutcome},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
pub struct ConfirmParams {
    /// Token from the confirmation link
    pub token: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Register with email and password
///
/// Signs the user in straight away unless email confirmation is required, in which case the
/// confirmation link is issued and no session is created.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 200, description = "Signed in, or awaiting email confirmation", body = SignUpResultDto),
        (status = 400, description = "Malformed email or password too short", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SignUpDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.auth);

    let result = match auth_service.sign_up(dto).await? {
        SignUpOutcome::SignedIn(user, profile) => {
            SessionUserId::insert(&session, user.id).await?;

            SignUpResultDto::SignedIn {
                profile: UserProfileDto::from(profile),
            }
        }
        SignUpOutcome::ConfirmationRequired { .. } => SignUpResultDto::ConfirmationRequired,
    };

    Ok((StatusCode::OK, Json(result)))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = UserProfileDto),
        (status = 401, description = "Invalid login credentials", body = ErrorDto),
        (status = 403, description = "Email not confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SignInDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.auth);

    let (user, profile) = auth_service.sign_in_with_password(dto).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(UserProfileDto::from(profile))))
}

/// Confirm an email address from the link issued at sign-up
///
/// # Responses
/// - 307 (Temporary Redirect): Email confirmed and user signed in, redirect to the home view
/// - 400 (Bad Request): Unknown or already used token
#[utoipa::path(
    get,
    path = "/api/auth/confirm",
    tag = AUTH_TAG,
    params(ConfirmParams),
    responses(
        (status = 307, description = "Email confirmed, redirect to the home view"),
        (status = 400, description = "Invalid or used confirmation token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm(
    State(state): State<AppState>,
    session: Session,
    params: Query<ConfirmParams>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.auth);

    let (user, _) = auth_service.confirm_email(&params.0.token).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok(Redirect::temporary("/home"))
}

/// Login route to initiate login with an OAuth provider
///
/// Stores a fresh CSRF state and PKCE verifier in the session and redirects the user to the
/// provider's consent page.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to the provider
/// - 400 (Bad Request): Unknown provider, or provider without configured credentials
#[utoipa::path(
    get,
    path = "/api/auth/oauth/{provider}",
    tag = AUTH_TAG,
    params(("provider" = String, Path, description = "`google` or `facebook`")),
    responses(
        (status = 307, description = "Redirect to the provider's login page"),
        (status = 400, description = "Unsupported or unconfigured provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn oauth_login(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let kind = ProviderKind::from_path(&provider)?;
    let provider = state.oauth.get(kind)?;

    let request = provider.authorize_url();

    SessionAuthCsrf::insert(&session, &request.csrf_state).await?;
    SessionAuthPkce::insert(&session, &request.pkce_verifier).await?;

    Ok(Redirect::temporary(&request.url))
}

/// Callback route the provider redirects to after the user consented
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to the home view
/// - 400 (Bad Request): CSRF state mismatch, or the provider rejected the code
/// - 500 (Internal Server Error): Missing session state or a database error
#[utoipa::path(
    get,
    path = "/api/auth/oauth/{provider}/callback",
    tag = AUTH_TAG,
    params(
        ("provider" = String, Path, description = "`google` or `facebook`"),
        CallbackParams
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the home view"),
        (status = 400, description = "CSRF mismatch or failed code exchange", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn oauth_callback(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let kind = ProviderKind::from_path(&provider)?;
    let provider = state.oauth.get(kind)?;

    validate_csrf(&session, &params.0.state).await?;

    let Some(pkce_verifier) = SessionAuthPkce::remove(&session).await? else {
        return Err(Error::InternalError(
            "PKCE verifier missing from session during OAuth callback".to_string(),
        ));
    };

    let account = provider
        .exchange_code(params.0.code.clone(), pkce_verifier)
        .await?;

    let auth_service = AuthService::new(&state.db, &state.auth);
    let (user, _) = auth_service.sign_in_with_provider(kind, account).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok(Redirect::temporary("/home"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the sign-in view
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the sign-in view"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored errors in the Redis store
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/auth"))
}

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user's profile", body = UserProfileDto),
        (status = 404, description = "No user signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserProfileDto::from(profile))))
}
