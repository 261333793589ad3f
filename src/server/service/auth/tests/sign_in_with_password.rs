use crate::{
    model::auth::SignInDto,
    server::error::{auth::AuthError, Error},
};

use super::*;

fn sign_in_dto(email: &str, password: &str) -> SignInDto {
    SignInDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect the identity and profile for correct credentials
#[tokio::test]
async fn signs_in_with_correct_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(false);
    let auth_service = AuthService::new(&test.state.db, &settings);
    auth_service
        .sign_up(sign_up_dto("ion@example.com"))
        .await
        .unwrap();

    let result = auth_service
        .sign_in_with_password(sign_in_dto(
            " ION@example.com ",
            consularo_test_utils::constant::TEST_PASSWORD,
        ))
        .await;

    let (user, profile) = result.unwrap();
    assert_eq!(user.email, "ion@example.com");
    assert_eq!(profile.id, user.id);

    Ok(())
}

/// Expect InvalidCredentials for a wrong password
#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(false);
    let auth_service = AuthService::new(&test.state.db, &settings);
    auth_service
        .sign_up(sign_up_dto("ion@example.com"))
        .await
        .unwrap();

    let result = auth_service
        .sign_in_with_password(sign_in_dto("ion@example.com", "wrong-horse"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect InvalidCredentials for an unknown email or an identity without a password
#[tokio::test]
async fn fails_for_unknown_or_oauth_identity() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_auth_user("oauth@example.com").await?;
    let settings = settings(false);
    let auth_service = AuthService::new(&test.state.db, &settings);

    for email in ["nobody@example.com", "oauth@example.com"] {
        let result = auth_service
            .sign_in_with_password(sign_in_dto(
                email,
                consularo_test_utils::constant::TEST_PASSWORD,
            ))
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Expect EmailNotConfirmed before the confirmation link is followed
#[tokio::test]
async fn fails_for_unconfirmed_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let settings = settings(true);
    let auth_service = AuthService::new(&test.state.db, &settings);
    auth_service
        .sign_up(sign_up_dto("ion@example.com"))
        .await
        .unwrap();

    let result = auth_service
        .sign_in_with_password(sign_in_dto(
            "ion@example.com",
            consularo_test_utils::constant::TEST_PASSWORD,
        ))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::EmailNotConfirmed))
    ));

    Ok(())
}
