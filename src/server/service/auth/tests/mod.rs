mod sign_in_with_password;
mod sign_up;

use consularo_test_utils::prelude::*;

use crate::{
    model::auth::SignUpDto,
    server::{model::app::AuthSettings, service::auth::AuthService},
};

fn settings(require_email_confirmation: bool) -> AuthSettings {
    AuthSettings {
        app_url: consularo_test_utils::constant::TEST_APP_URL.to_string(),
        require_email_confirmation,
    }
}

fn sign_up_dto(email: &str) -> SignUpDto {
    SignUpDto {
        email: email.to_string(),
        password: consularo_test_utils::constant::TEST_PASSWORD.to_string(),
        first_name: "Ion".to_string(),
        last_name: "Popescu".to_string(),
    }
}
