//! Declarative test builder.
//!
//! Configuration methods queue tables, fixtures and mock endpoints, all of which are
//! applied in order during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixture rows and mock HTTP endpoints. Methods can be chained together and finalized
/// with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_content_tables: bool,

    users: Vec<(String, String)>, // (email, role)

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    upload_endpoints: Vec<(String, usize)>, // (bucket, expected_requests)
    delete_endpoints: Vec<(String, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_content_tables: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            upload_endpoints: Vec::new(),
            delete_endpoints: Vec::new(),
        }
    }

    /// Add the identity and profile tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the announcement, event and alert tables.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use consularo_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), consularo_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_user_tables()
    ///     .with_table(UserDocument)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an identity with a profile of the given role.
    ///
    /// Requires `with_user_tables`.
    pub fn with_user(mut self, email: impl Into<String>, role: impl Into<String>) -> Self {
        self.users.push((email.into(), role.into()));
        self
    }

    /// Add a mock object storage upload endpoint for `bucket`.
    pub fn with_upload_endpoint(mut self, bucket: impl Into<String>, expected_requests: usize) -> Self {
        self.upload_endpoints.push((bucket.into(), expected_requests));
        self
    }

    /// Add a mock object storage delete endpoint for `bucket`.
    pub fn with_delete_endpoint(mut self, bucket: impl Into<String>, expected_requests: usize) -> Self {
        self.delete_endpoints.push((bucket.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with direct access to the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables, content tables, then custom tables)
    /// 2. Inserts fixture rows
    /// 3. Creates mock HTTP endpoints (custom endpoints first)
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AuthUser),
                schema.create_table_from_entity(entity::prelude::Profile),
            ]);
        }

        if self.include_content_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Announcement),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::Alert),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (email, role) in self.users {
            setup.user().insert_user_with_profile(&email, &role).await?;
        }

        // Custom endpoints first so tests can queue an error response ahead of a success
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (bucket, expected) in self.upload_endpoints {
            mocks.push(setup.storage().create_upload_endpoint(&bucket, expected));
        }

        for (bucket, expected) in self.delete_endpoints {
            mocks.push(setup.storage().create_delete_endpoint(&bucket, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
