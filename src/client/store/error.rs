use crate::client::util::api::ApiError;

/// The failure currently shown in the error modal, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorState {
    pub error: Option<ApiError>,
}

impl ErrorState {
    pub fn show(&mut self, error: ApiError) {
        self.error = Some(error);
    }

    pub fn dismiss(&mut self) {
        self.error = None;
    }
}
