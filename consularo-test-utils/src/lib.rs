pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        test_setup_with_content_tables, test_setup_with_tables, test_setup_with_user_tables,
        TestBuilder, TestError, TestSetup,
    };
}
