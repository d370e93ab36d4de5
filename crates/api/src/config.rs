use std::path::PathBuf;

use anyhow::Context;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: PathBuf,
    /// Reject signups once an activity reaches `max_participants`.
    pub enforce_capacity: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["http://localhost:8000".to_string()],
            request_timeout_secs: 30,
            static_dir: PathBuf::from("static"),
            enforce_capacity: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:8000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `STATIC_DIR`           | `static`                |
    /// | `ENFORCE_CAPACITY`     | `false`                 |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid u16, got '{raw}'"))?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a valid u64, got '{raw}'"))?,
            None => defaults.request_timeout_secs,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let enforce_capacity = match lookup("ENFORCE_CAPACITY") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("ENFORCE_CAPACITY must be true or false, got '{raw}'"))?,
            None => defaults.enforce_capacity,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            enforce_capacity,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
