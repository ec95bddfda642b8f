//! API configuration
//!
//! Values are layered: built-in defaults, then an optional
//! `config/loan-api.{toml,yaml,json}` file, then `API_`-prefixed
//! environment variables. A `.env` file is read by the binary before this
//! runs, so its entries count as environment variables.

use serde::Deserialize;
use std::time::Duration;

use infra_db::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/loans";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL; empty means "resolve from the environment"
    pub database_url: String,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// Minimum idle database connections
    pub db_min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub db_acquire_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: String::new(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            db_max_connections: 10,
            db_min_connections: 2,
            db_acquire_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the optional config file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config: ApiConfig = config::Config::builder()
            .add_source(config::File::with_name("config/loan-api").required(false))
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.database_url.is_empty() {
            config.database_url = resolve_database_url(|key| std::env::var(key).ok());
        }
        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for the database layer
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(Duration::from_secs(self.db_acquire_timeout_secs))
    }
}

/// Resolves the database URL when `API_DATABASE_URL` is not set
///
/// `DATABASE_URL` wins. Otherwise the URL is composed from `DB_HOST`,
/// `DB_PORT`, `DB_USER`, `DB_PASS` and `DB_NAME`, provided `DB_HOST` is set.
/// Falls back to a local database.
pub fn resolve_database_url(lookup: impl Fn(&str) -> Option<String>) -> String {
    if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
        return url;
    }

    match lookup("DB_HOST").filter(|h| !h.is_empty()) {
        Some(host) => {
            let port = lookup("DB_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432);
            let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
            let password = lookup("DB_PASS").unwrap_or_default();
            let database = lookup("DB_NAME").unwrap_or_else(|| "loans".to_string());
            DatabaseConfig::from_parts(&host, port, &user, &password, &database).url
        }
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let url = resolve_database_url(env(&[
            ("DATABASE_URL", "postgres://primary/loans"),
            ("DB_HOST", "ignored"),
        ]));
        assert_eq!(url, "postgres://primary/loans");
    }

    #[test]
    fn test_database_url_composed_from_parts() {
        let url = resolve_database_url(env(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "5433"),
            ("DB_USER", "loan"),
            ("DB_PASS", "secret"),
            ("DB_NAME", "applications"),
        ]));
        assert_eq!(url, "postgres://loan:secret@db:5433/applications?sslmode=disable");
    }

    #[test]
    fn test_database_url_default() {
        assert_eq!(resolve_database_url(env(&[])), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_pool_settings_flow_into_database_config() {
        let config = ApiConfig {
            database_url: "postgres://db/loans".to_string(),
            db_max_connections: 25,
            db_acquire_timeout_secs: 5,
            ..ApiConfig::default()
        };
        let database = config.database();
        assert_eq!(database.url, "postgres://db/loans");
        assert_eq!(database.max_connections, 25);
        assert_eq!(database.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
