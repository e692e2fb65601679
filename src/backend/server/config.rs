/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * selects the user store.
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default | Meaning                          |
 * |----------------|----------|---------|----------------------------------|
 * | `JWT_SECRET`   | yes      |         | HS256 signing secret             |
 * | `SERVER_PORT`  | no       | 4000    | TCP port to listen on            |
 * | `DATABASE_URL` | no       |         | PostgreSQL URL; in-memory if unset |
 * | `BCRYPT_COST`  | no       | 10      | bcrypt work factor               |
 *
 * # Error Handling
 *
 * A missing secret is fatal: `from_env` returns `ConfigError` and the binary
 * exits before binding a socket. A configured database that cannot be reached
 * or migrated is fatal as well.
 */

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::password::BCRYPT_COST;
use crate::backend::auth::users::{MemoryUserStore, PgUserStore, UserStore};

/// Port used when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 4000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not defined in the environment variables")]
    MissingSecret,

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration, built once at startup
#[derive(Clone)]
pub struct ServerConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection URL
    pub database_url: Option<String>,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Configuration with the given secret and defaults everywhere else
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            port: DEFAULT_PORT,
            database_url: None,
            bcrypt_cost: BCRYPT_COST,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let port = match lookup("SERVER_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "SERVER_PORT", value })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or(ConfigError::InvalidValue { key: "BCRYPT_COST", value })?,
            None => BCRYPT_COST,
        };

        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

        Ok(Self {
            jwt_secret,
            port,
            database_url,
            bcrypt_cost,
        })
    }
}

/// Build the user store selected by the configuration
///
/// - `DATABASE_URL` set: connect, run migrations, use PostgreSQL
/// - otherwise: an empty in-memory store
pub async fn load_user_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, ConfigError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgUserStore::new(pool)))
}
