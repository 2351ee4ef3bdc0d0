/**
 * Server Initialization
 *
 * This module assembles the Axum application: application state from the
 * database pool and admission policy, then the router with all routes and
 * middleware.
 *
 * Tests build the same application against an in-memory database, so this
 * is the single place the real router shape is defined.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::chat::ChatPolicy;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `db_pool` - Connected pool with migrations already applied
/// * `chat_policy` - Send admission policy
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(db_pool: SqlitePool, chat_policy: ChatPolicy) -> Router<()> {
    tracing::info!("Initializing chat backend");

    let app_state = AppState {
        db_pool,
        chat_policy,
    };

    create_router(app_state)
}
