use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL portfolio links are built against, e.g. "https://instafolio.app".
    pub public_base_url: String,
    pub port: u16,
    /// Upper bound on the Postgres connection pool.
    pub db_max_connections: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "https://instafolio.app".to_string()),
            port: env_parse("PORT", 8080)?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 10)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses an optional numeric env var, falling back to `default` when unset.
fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("'{key}' must be a valid number, got '{value}'")),
        Err(_) => Ok(default),
    }
}
