/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * route table with the shared middleware stack.
 *
 * # Middleware
 *
 * - `TraceLayer` - request/response logging through `tracing`
 * - `CorsLayer` - permissive CORS for the mobile client
 *
 * Unknown routes fall through to a plain 404.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool and policy
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_chat_routes(Router::new());

    router
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
