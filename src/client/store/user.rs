use crate::model::user::UserProfileDto;

/// Signed-in user's profile
///
/// `fetched` turns true once the session request has answered, so views can tell an
/// anonymous visitor apart from a session that is still loading.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserProfileDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .map(|user| user.role.is_admin())
            .unwrap_or(false)
    }
}
