use crate::server::{
    data::identity::AuthUserRepository,
    error::{auth::AuthError, validation::ValidationError, Error},
    service::auth::SignUpOutcome,
};

use super::*;

/// Expect a signed-in user with a profile when confirmation is not required
#[tokio::test]
async fn signs_in_without_confirmation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(false);

    let auth_service = AuthService::new(&test.state.db, &settings);
    let result = auth_service.sign_up(sign_up_dto("Ion@Example.com")).await;

    let Ok(SignUpOutcome::SignedIn(user, profile)) = result else {
        panic!("expected SignedIn, got {:?}", result);
    };
    assert_eq!(user.email, "ion@example.com");
    assert!(user.email_confirmed);
    assert_eq!(profile.id, user.id);
    assert_eq!(profile.first_name.as_deref(), Some("Ion"));
    assert_eq!(profile.last_name.as_deref(), Some("Popescu"));
    assert_eq!(profile.role, "user");

    Ok(())
}

/// Expect a confirmation token and an unconfirmed identity when confirmation is required
#[tokio::test]
async fn requires_confirmation_when_configured() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(true);

    let auth_service = AuthService::new(&test.state.db, &settings);
    let result = auth_service.sign_up(sign_up_dto("ion@example.com")).await;

    let Ok(SignUpOutcome::ConfirmationRequired { user_id, token }) = result else {
        panic!("expected ConfirmationRequired, got {:?}", result);
    };
    let user = AuthUserRepository::new(&test.state.db)
        .find_by_id(user_id)
        .await?
        .unwrap();
    assert!(!user.email_confirmed);
    assert_eq!(user.confirmation_token, Some(token));

    Ok(())
}

/// Expect UserAlreadyRegistered for an email that is already in use, in any case
#[tokio::test]
async fn fails_for_registered_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_auth_user("ion@example.com").await?;
    let settings = settings(false);

    let auth_service = AuthService::new(&test.state.db, &settings);
    let result = auth_service.sign_up(sign_up_dto("ION@example.com")).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserAlreadyRegistered))
    ));

    Ok(())
}

/// Expect a validation error for a short password
#[tokio::test]
async fn fails_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(false);

    let mut dto = sign_up_dto("ion@example.com");
    dto.password = "12345".to_string();
    let auth_service = AuthService::new(&test.state.db, &settings);
    let result = auth_service.sign_up(dto).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::PasswordTooShort(6)))
    ));

    Ok(())
}

/// Expect a validation error for a malformed email
#[tokio::test]
async fn fails_for_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(false);

    let auth_service = AuthService::new(&test.state.db, &settings);
    for email in ["", "ion", "ion@", "@example.com", "ion@example", "ion pop@example.com"] {
        let result = auth_service.sign_up(sign_up_dto(email)).await;

        assert!(
            matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidEmail))
            ),
            "{:?} should be rejected",
            email
        );
    }

    Ok(())
}
