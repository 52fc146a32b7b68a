//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
