use std::str::FromStr;

/// Which [`ItemStore`](yapp_db::store::ItemStore) backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at `DATABASE_URL`.
    Postgres,
    /// Volatile in-process store; contents vanish on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                var: "STORE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// A configuration value could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Store connection string (default: `postgres://localhost:5432/yapp_db`).
    pub database_url: String,
    /// Store backend (default: `postgres`).
    pub store_backend: StoreBackend,
    /// Upper bound on establishing the store connection at startup, in seconds.
    pub db_connect_timeout_secs: u64,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                              |
    /// |---------------------------|--------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                            |
    /// | `PORT`                    | `5000`                               |
    /// | `DATABASE_URL`            | `postgres://localhost:5432/yapp_db`  |
    /// | `STORE_BACKEND`           | `postgres`                           |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `30`                                 |
    /// | `CORS_ORIGINS`            | `http://localhost:3000`              |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse_var("PORT", var("PORT", "5000"))?;
        let database_url = var("DATABASE_URL", "postgres://localhost:5432/yapp_db");
        let store_backend: StoreBackend = var("STORE_BACKEND", "postgres").parse()?;
        let db_connect_timeout_secs: u64 =
            parse_var("DB_CONNECT_TIMEOUT_SECS", var("DB_CONNECT_TIMEOUT_SECS", "30"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;

        Ok(Self {
            host,
            port,
            database_url,
            store_backend,
            db_connect_timeout_secs,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
