use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_RECENT_LIMIT, DEFAULT_SLUG_LENGTH, MAX_SLUG_LENGTH};
use crate::error::{CoreError, CoreResult};

/// SQLite file used when no `DATABASE_URL` is configured.
pub const DEFAULT_SQLITE_PATH: &str = "events.db";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub events: EventsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u8,
}

impl DatabaseConfig {
    /// ## Summary
    /// Returns the configured database URL, falling back to the local SQLite file.
    #[must_use]
    pub fn url_or_default(&self) -> String {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("sqlite://{DEFAULT_SQLITE_PATH}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    pub slug_length: usize,
    pub recent_limit: i64,
}

impl EventsConfig {
    /// ## Summary
    /// Checks the values the event service cannot work with.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `slug_length` is outside
    /// `1..=MAX_SLUG_LENGTH` or `recent_limit` is negative.
    pub fn validate(&self) -> CoreResult<()> {
        if !(1..=MAX_SLUG_LENGTH).contains(&self.slug_length) {
            return Err(CoreError::ConfigError(format!(
                "events.slug_length must be between 1 and {MAX_SLUG_LENGTH}, got {}",
                self.slug_length
            )));
        }
        if self.recent_limit < 0 {
            return Err(CoreError::ConfigError(format!(
                "events.recent_limit must not be negative, got {}",
                self.recent_limit
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: None,
                max_connections: 4,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            events: EventsConfig {
                slug_length: DEFAULT_SLUG_LENGTH,
                recent_limit: DEFAULT_RECENT_LIMIT,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml`,
    /// `TMINUS__`-prefixed environment variables, and finally the
    /// conventional `DATABASE_URL` and `PORT` variables.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails, or if the event settings are out of range.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.max_connections", 4)?
            .set_default("events.slug_length", i64::try_from(DEFAULT_SLUG_LENGTH)?)?
            .set_default("events.recent_limit", DEFAULT_RECENT_LIMIT)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("TMINUS")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .set_override_option("database.url", non_empty_env("DATABASE_URL"))?
            .set_override_option("server.port", non_empty_env("PORT"))?
            .build()?
            .try_deserialize::<Settings>()?;

        settings.events.validate()?;

        Ok(settings)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
