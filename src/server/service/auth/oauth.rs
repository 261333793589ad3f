//! OAuth2 sign-in providers.
//!
//! Each provider runs the authorization code flow with PKCE. The CSRF state and PKCE
//! verifier returned by [`OAuthProvider::authorize_url`] are kept in the session by the
//! controller and handed back to [`OAuthProvider::exchange_code`] on callback.

use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope,
    TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::server::{
    config::OAuthClientConfig,
    error::{auth::AuthError, config::ConfigError, validation::ValidationError, Error},
    model::identity::IdentityMetadata,
};

/// OAuth client type with auth URL, token URL and redirect URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Google,
    Facebook,
}

impl ProviderKind {
    /// Provider named in the request path, e.g. `/api/auth/oauth/google`
    pub fn from_path(name: &str) -> Result<Self, ValidationError> {
        match name {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            other => Err(ValidationError::UnsupportedProvider(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }

    pub fn default_endpoints(&self) -> ProviderEndpoints {
        match self {
            Self::Google => ProviderEndpoints {
                auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
                token_url: "https://oauth2.googleapis.com/token".to_string(),
                userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
            },
            Self::Facebook => ProviderEndpoints {
                auth_url: "https://www.facebook.com/v19.0/dialog/oauth".to_string(),
                token_url: "https://graph.facebook.com/v19.0/oauth/access_token".to_string(),
                userinfo_url: "https://graph.facebook.com/me?fields=id,name,email,picture"
                    .to_string(),
            },
        }
    }

    fn scopes(&self) -> &'static [&'static str] {
        match self {
            Self::Google => &["openid", "email", "profile"],
            Self::Facebook => &["email", "public_profile"],
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProviderEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

/// Redirect to the provider plus the values needed to validate its callback.
#[derive(Debug)]
pub struct AuthorizationRequest {
    pub url: String,
    pub csrf_state: String,
    pub pkce_verifier: String,
}

/// Account details returned by a provider's userinfo endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderAccount {
    pub subject: String,
    pub email: String,
    pub metadata: IdentityMetadata,
}

#[derive(Deserialize)]
struct UserInfo {
    #[serde(alias = "sub")]
    id: String,
    email: Option<String>,
    name: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
    picture: Option<Picture>,
}

/// Google returns the picture as a URL, Facebook nests it under `data.url`
#[derive(Deserialize)]
#[serde(untagged)]
enum Picture {
    Url(String),
    Nested { data: PictureData },
}

#[derive(Deserialize)]
struct PictureData {
    url: String,
}

impl UserInfo {
    fn into_account(self) -> Result<ProviderAccount, AuthError> {
        let email = self
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| {
                AuthError::OAuthExchangeFailed("provider did not return an email".to_string())
            })?;

        let picture = self.picture.map(|picture| match picture {
            Picture::Url(url) => url,
            Picture::Nested { data } => data.url,
        });

        Ok(ProviderAccount {
            subject: self.id,
            email: email.trim().to_lowercase(),
            metadata: IdentityMetadata {
                first_name: self.given_name,
                last_name: self.family_name,
                full_name: self.name,
                avatar_url: None,
                picture,
            },
        })
    }
}

#[derive(Clone)]
pub struct OAuthProvider {
    kind: ProviderKind,
    client: ConfiguredClient,
    userinfo_url: String,
    http: reqwest::Client,
}

impl OAuthProvider {
    /// Provider using its public endpoints
    pub fn new(
        kind: ProviderKind,
        credentials: &OAuthClientConfig,
        app_url: &str,
    ) -> Result<Self, ConfigError> {
        Self::with_endpoints(kind, credentials, app_url, kind.default_endpoints())
    }

    pub fn with_endpoints(
        kind: ProviderKind,
        credentials: &OAuthClientConfig,
        app_url: &str,
        endpoints: ProviderEndpoints,
    ) -> Result<Self, ConfigError> {
        let invalid_url = |reason: String| ConfigError::InvalidEnvValue {
            var: "APP_URL".to_string(),
            reason,
        };

        let redirect_url = format!("{}/api/auth/oauth/{}/callback", app_url, kind.as_str());

        let client = BasicClient::new(ClientId::new(credentials.client_id.clone()))
            .set_client_secret(ClientSecret::new(credentials.client_secret.clone()))
            .set_auth_uri(
                AuthUrl::new(endpoints.auth_url).map_err(|e| invalid_url(e.to_string()))?,
            )
            .set_token_uri(
                TokenUrl::new(endpoints.token_url).map_err(|e| invalid_url(e.to_string()))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(redirect_url).map_err(|e| invalid_url(e.to_string()))?,
            );

        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: format!("{}_CLIENT_ID", kind.as_str().to_uppercase()),
                reason: e.to_string(),
            })?;

        Ok(Self {
            kind,
            client,
            userinfo_url: endpoints.userinfo_url,
            http,
        })
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Builds the provider redirect with a fresh CSRF state and PKCE challenge
    pub fn authorize_url(&self) -> AuthorizationRequest {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut request = self.client.authorize_url(CsrfToken::new_random);
        for scope in self.kind.scopes() {
            request = request.add_scope(Scope::new(scope.to_string()));
        }
        let (url, csrf_state) = request.set_pkce_challenge(pkce_challenge).url();

        AuthorizationRequest {
            url: url.to_string(),
            csrf_state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        }
    }

    /// Exchanges the authorization code and fetches the account's user info
    ///
    /// # Returns
    /// - `Ok(ProviderAccount)` - Subject, lowercased email and profile metadata
    /// - `Err(Error::AuthError(AuthError::OAuthExchangeFailed))` - Provider rejected the code,
    ///   failed to answer, or returned no email
    pub async fn exchange_code(
        &self,
        code: String,
        pkce_verifier: String,
    ) -> Result<ProviderAccount, Error> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::OAuthExchangeFailed(format!("token exchange: {}", e)))?;

        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .map_err(|e| AuthError::OAuthExchangeFailed(format!("userinfo: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::OAuthExchangeFailed(format!(
                "userinfo answered {}",
                response.status()
            ))
            .into());
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| AuthError::OAuthExchangeFailed(format!("userinfo body: {}", e)))?;

        Ok(info.into_account()?)
    }
}

/// Configured OAuth providers, a provider without credentials is `None`.
#[derive(Clone, Default)]
pub struct OAuthProviders {
    pub google: Option<OAuthProvider>,
    pub facebook: Option<OAuthProvider>,
}

impl OAuthProviders {
    pub fn get(&self, kind: ProviderKind) -> Result<&OAuthProvider, ValidationError> {
        let provider = match kind {
            ProviderKind::Google => self.google.as_ref(),
            ProviderKind::Facebook => self.facebook.as_ref(),
        };

        provider.ok_or_else(|| ValidationError::ProviderNotConfigured(kind.as_str().to_string()))
    }
}
