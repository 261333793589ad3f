mod content;
mod images;

use consularo_test_utils::prelude::*;

use crate::server::{model::app::AppState, service::admin::AdminService};
