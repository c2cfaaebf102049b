/**
 * Server Configuration
 *
 * Configuration comes from environment variables (a `.env` file is loaded
 * in `main` before this runs):
 *
 * - `JWT_SECRET` - token signing secret, required
 * - `TOKEN_TTL_SECS` - token lifetime in seconds, default 60
 * - `DATABASE_URL` - PostgreSQL connection string, optional; without it
 *   the server runs on the in-memory credential store
 * - `SERVER_PORT` - listen port, default 3000
 *
 * A missing signing secret is a startup error. A missing database is not:
 * the server degrades to the in-memory store with a warning.
 */

use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

const DEFAULT_TOKEN_TTL_SECS: u64 = 60;
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingJwtSecret,

    #[error("invalid {name}: {detail}")]
    Invalid { name: &'static str, detail: String },
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Token signing secret
    pub jwt_secret: String,
    /// Access token lifetime
    pub token_ttl: Duration,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is absent or empty, or when a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let token_ttl = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: "TOKEN_TTL_SECS",
                    detail: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "SERVER_PORT",
                detail: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            token_ttl,
        })
    }
}

/// Connect to PostgreSQL and apply migrations
///
/// Migration failure is logged but does not abort startup; the schema may
/// already be in place from an earlier run.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {e}");
            tracing::warn!("Continuing without migrations - schema may already exist");
        }
    }

    Ok(pool)
}
