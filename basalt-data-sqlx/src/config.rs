use crate::error::SqlxErrorExt;
use basalt_data::DataError;
use serde::Deserialize;
use sqlx::pool::PoolOptions;
use sqlx::{Database, Pool};
use std::time::Duration;

/// Database connection settings.
///
/// Deserializable from any serde source; only `url` is required.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool: Pool<Sqlite> = config.connect().await?;
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    30
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }

    /// Read the configuration from the environment, loading a `.env` file
    /// first if one is present.
    ///
    /// `DATABASE_URL` is required; `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_ACQUIRE_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Result<Self, DataError> {
        let _ = dotenvy::dotenv();
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| DataError::Other("DATABASE_URL is not set".into()))?;
        let mut config = Self::new(url);
        if let Ok(value) = std::env::var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = value.parse().map_err(|_| {
                DataError::Other(format!("DATABASE_MAX_CONNECTIONS is not a number: {value}"))
            })?;
        }
        if let Ok(value) = std::env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            config.acquire_timeout_secs = value.parse().map_err(|_| {
                DataError::Other(format!(
                    "DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {value}"
                ))
            })?;
        }
        Ok(config)
    }

    /// Pool options with this configuration applied.
    pub fn pool_options<DB: Database>(&self) -> PoolOptions<DB> {
        PoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    /// Connect a pool using this configuration.
    pub async fn connect<DB: Database>(&self) -> Result<Pool<DB>, DataError> {
        self.pool_options()
            .connect(&self.url)
            .await
            .map_err(|e| e.into_data_error())
    }
}
