//! Declarative test builder.
//!
//! `TestBuilder` queues the schema and fixture users a test needs; everything is created when
//! `build()` is called.

use entity::sea_orm_active_enums::Role;
use migration::{Migrator, MigratorTrait};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    run_migrations: bool,
    users: Vec<(String, Role)>,
}

impl TestBuilder {
    /// Create a new builder with no tables and no fixtures.
    pub fn new() -> Self {
        Self {
            run_migrations: false,
            users: Vec::new(),
        }
    }

    /// Create every application table by running the migrator.
    ///
    /// Without this the database is empty, which tests use to exercise database failures.
    pub fn with_tables(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Insert an admin account during `build()`.
    ///
    /// Implies [`TestBuilder::with_tables`].
    pub fn with_admin(mut self, username: &str) -> Self {
        self.run_migrations = true;
        self.users.push((username.to_string(), Role::Admin));
        self
    }

    /// Insert an author account during `build()`.
    ///
    /// Implies [`TestBuilder::with_tables`].
    pub fn with_author(mut self, username: &str) -> Self {
        self.run_migrations = true;
        self.users.push((username.to_string(), Role::Author));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Migration or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        if self.run_migrations {
            Migrator::up(&test.db, None).await?;
        }

        for (username, role) in self.users {
            test.user().insert_user(&username, role).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
