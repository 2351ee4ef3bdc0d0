/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the SQLite connection pool and
 * the admission policy. There is no other in-process shared mutable state;
 * all coordination between concurrent requests goes through the database.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the pool (most of
 * them) or just the policy without taking the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::chat::ChatPolicy;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Send admission policy
    pub chat_policy: ChatPolicy,
}

/// Allow handlers to extract the pool directly via `State(SqlitePool)`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the admission policy directly
impl FromRef<AppState> for ChatPolicy {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat_policy
    }
}
