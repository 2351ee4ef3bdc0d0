/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables and opening the SQLite database.
 *
 * # Configuration Sources
 *
 * Configuration is read from the environment, with sensible defaults for
 * local development:
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite:orbis.db`
 * - `SERVER_PORT` - listen port, default 3000
 * - `ACCEPTED_REQUEST_OPENS_CHAT` - when `true`/`1`, an accepted chat
 *   request opens the conversation without a follow edge; default off, in
 *   which case acceptance is bookkeeping and the follow graph stays the
 *   sole admission gate
 */

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use crate::backend::chat::ChatPolicy;

/// Configuration loaded at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Send admission policy
    pub chat_policy: ChatPolicy,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, defaulting to sqlite:orbis.db");
            "sqlite:orbis.db".to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let accepted_request_opens_chat = std::env::var("ACCEPTED_REQUEST_OPENS_CHAT")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            database_url,
            port,
            chat_policy: ChatPolicy {
                accepted_request_opens_chat,
            },
        }
    }
}

/// Open the database and bring the schema up to date
///
/// Creates the database file when missing and applies the migrations in
/// `migrations/`.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
