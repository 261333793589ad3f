//! Authentication service layer.
//!
//! Email and password sign-up and sign-in, email confirmation, and OAuth sign-in. Every
//! successful authentication ends with the profile bootstrap so the caller always receives
//! the user's profile alongside their identity.

pub mod oauth;
pub mod password;
pub mod provision;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::auth::{SignInDto, SignUpDto},
    server::{
        data::identity::AuthUserRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{
            app::AuthSettings,
            db::{AuthUserModel, ProfileModel},
            identity::{Identity, IdentityMetadata, NewIdentity},
        },
        service::{
            auth::{
                oauth::{ProviderAccount, ProviderKind},
                password::{hash_password, verify_password},
                provision::spawn_profile_provisioning,
            },
            profile::bootstrap::ensure_profile,
        },
    },
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Result of a password sign-up.
#[derive(Debug)]
pub enum SignUpOutcome {
    /// The user is signed in and their profile exists
    SignedIn(AuthUserModel, ProfileModel),
    /// The user must follow the confirmation link before signing in
    ConfirmationRequired { user_id: Uuid, token: String },
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a AuthSettings,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a AuthSettings) -> Self {
        Self { db, settings }
    }

    /// Registers an email and password identity.
    ///
    /// Emails are lowercased before they are stored or compared. The provisioning hook is
    /// fired for the new identity, then either a confirmation token is issued or the profile
    /// is bootstrapped and the user is signed in.
    ///
    /// # Returns
    /// - `Ok(SignUpOutcome)` - Signed in, or awaiting email confirmation
    /// - `Err(Error::ValidationError)` - Malformed email or password too short
    /// - `Err(Error::AuthError(AuthError::UserAlreadyRegistered))` - Email already in use
    pub async fn sign_up(&self, sign_up: SignUpDto) -> Result<SignUpOutcome, Error> {
        let email = normalize_email(&sign_up.email)?;
        if sign_up.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }

        let user_repo = AuthUserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyRegistered.into());
        }

        let confirmation_token = self
            .settings
            .require_email_confirmation
            .then(|| Uuid::new_v4().simple().to_string());

        let user = user_repo
            .create(NewIdentity {
                email,
                password_hash: Some(hash_password(&sign_up.password)?),
                provider: "email".to_string(),
                provider_subject: None,
                metadata: IdentityMetadata {
                    first_name: Some(sign_up.first_name.trim().to_string()),
                    last_name: Some(sign_up.last_name.trim().to_string()),
                    ..Default::default()
                },
                email_confirmed: confirmation_token.is_none(),
                confirmation_token: confirmation_token.clone(),
            })
            .await?;

        let identity = Identity::from(&user);
        spawn_profile_provisioning(self.db.clone(), identity.clone());

        if let Some(token) = confirmation_token {
            tracing::info!(
                "Confirmation link for user {}: {}/api/auth/confirm?token={}",
                user.id,
                self.settings.app_url,
                token
            );

            return Ok(SignUpOutcome::ConfirmationRequired {
                user_id: user.id,
                token,
            });
        }

        let profile = ensure_profile(self.db, &identity).await?;

        Ok(SignUpOutcome::SignedIn(user, profile))
    }

    /// Confirms the email of the identity holding `token`, which is consumed.
    ///
    /// # Returns
    /// - `Ok((AuthUserModel, ProfileModel))` - Confirmed identity and its profile
    /// - `Err(Error::AuthError(AuthError::InvalidConfirmationToken))` - Unknown or used token
    pub async fn confirm_email(&self, token: &str) -> Result<(AuthUserModel, ProfileModel), Error> {
        let user_repo = AuthUserRepository::new(self.db);

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::InvalidConfirmationToken.into());
        }

        let Some(user) = user_repo.find_by_confirmation_token(token).await? else {
            return Err(AuthError::InvalidConfirmationToken.into());
        };
        let user = user_repo
            .confirm_email(user.id)
            .await?
            .ok_or(AuthError::InvalidConfirmationToken)?;

        let profile = ensure_profile(self.db, &Identity::from(&user)).await?;

        Ok((user, profile))
    }

    /// Signs in with email and password.
    ///
    /// # Returns
    /// - `Ok((AuthUserModel, ProfileModel))` - Identity and its bootstrapped profile
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email, OAuth-only
    ///   identity, or wrong password
    /// - `Err(Error::AuthError(AuthError::EmailNotConfirmed))` - Correct password, but the
    ///   confirmation link was never followed
    pub async fn sign_in_with_password(
        &self,
        sign_in: SignInDto,
    ) -> Result<(AuthUserModel, ProfileModel), Error> {
        let email = sign_in.email.trim().to_lowercase();

        let Some(user) = AuthUserRepository::new(self.db)
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(password_hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&sign_in.password, password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.email_confirmed {
            return Err(AuthError::EmailNotConfirmed.into());
        }

        let profile = ensure_profile(self.db, &Identity::from(&user)).await?;

        Ok((user, profile))
    }

    /// Signs in with an account returned by an OAuth provider.
    ///
    /// The identity is looked up by provider subject first, then by email, linking the
    /// provider to an existing identity with the same address. A new identity is created
    /// otherwise and the provisioning hook is fired.
    pub async fn sign_in_with_provider(
        &self,
        kind: ProviderKind,
        account: ProviderAccount,
    ) -> Result<(AuthUserModel, ProfileModel), Error> {
        let user_repo = AuthUserRepository::new(self.db);

        let existing = match user_repo
            .find_by_provider_subject(kind.as_str(), &account.subject)
            .await?
        {
            Some(user) => user_repo
                .update_metadata(user.id, merge_metadata(&user, &account.metadata))
                .await?,
            None => match user_repo.find_by_email(&account.email).await? {
                Some(user) => {
                    tracing::debug!(
                        "Linking {} account {} to existing user {}",
                        kind.as_str(),
                        account.subject,
                        user.id
                    );

                    user_repo
                        .link_provider(user.id, kind.as_str(), &account.subject)
                        .await?
                }
                None => None,
            },
        };

        let user = match existing {
            Some(user) => user,
            None => {
                let user = user_repo
                    .create(NewIdentity {
                        email: account.email,
                        password_hash: None,
                        provider: kind.as_str().to_string(),
                        provider_subject: Some(account.subject),
                        metadata: account.metadata,
                        email_confirmed: true,
                        confirmation_token: None,
                    })
                    .await?;

                spawn_profile_provisioning(self.db.clone(), Identity::from(&user));

                user
            }
        };

        let profile = ensure_profile(self.db, &Identity::from(&user)).await?;

        Ok((user, profile))
    }

    /// Profile of the signed-in user, bootstrapping it if missing.
    ///
    /// # Returns
    /// - `Ok(Some(ProfileModel))` - The user's profile
    /// - `Ok(None)` - The identity no longer exists
    pub async fn session(&self, user_id: Uuid) -> Result<Option<ProfileModel>, Error> {
        let Some(user) = AuthUserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(ensure_profile(self.db, &Identity::from(&user)).await?))
    }
}

/// Lowercased, trimmed email with a plausible `local@domain.tld` shape
fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(email)
}

/// Provider metadata over the stored metadata, keys the provider omits are kept
fn merge_metadata(user: &AuthUserModel, fresh: &IdentityMetadata) -> serde_json::Value {
    let stored = IdentityMetadata::from_json(&user.metadata);

    IdentityMetadata {
        first_name: fresh.first_name.clone().or(stored.first_name),
        last_name: fresh.last_name.clone().or(stored.last_name),
        full_name: fresh.full_name.clone().or(stored.full_name),
        avatar_url: fresh.avatar_url.clone().or(stored.avatar_url),
        picture: fresh.picture.clone().or(stored.picture),
    }
    .to_json()
}
