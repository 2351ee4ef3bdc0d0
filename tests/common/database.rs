//! Database test fixtures and utilities
//!
//! Provides an in-memory SQLite database with migrations applied, so tests
//! run without any external service.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create a test database connection pool
///
/// The pool is capped at a single connection: every `sqlite::memory:`
/// connection is a private database, so a larger pool would hand tests a
/// different (empty) database per connection.
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database with the schema applied
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
