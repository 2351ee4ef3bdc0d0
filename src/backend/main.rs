/**
 * Orbis Server Entry Point
 *
 * This is the main entry point for the Orbis messaging backend. It loads
 * configuration from the environment, opens the database, and starts the
 * Axum HTTP server.
 */

use orbis::backend::server::config::{load_database, ServerConfig};
use orbis::backend::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();

    let db_pool = load_database(&config.database_url).await?;
    let app = create_app(db_pool, config.chat_policy);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
