use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Cross-origin policy applied to every route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, method and header.
    Permissive,
    /// Only the listed origins, with GET/POST/PUT/DELETE and `Content-Type`.
    Restricted(Vec<HeaderValue>),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("CORS_ORIGINS must list at least one origin when CORS_MODE=restricted")]
    MissingOrigins,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Connection pool size (default: `10`).
    pub max_db_connections: u32,
    pub cors: CorsPolicy,
    /// Directory served as static assets for unmatched paths; `None` disables.
    pub static_dir: Option<PathBuf>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default      |
    /// |----------------------------|--------------|
    /// | `HOST`                     | `0.0.0.0`    |
    /// | `PORT`                     | `3000`       |
    /// | `DATABASE_URL`             | unset        |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`         |
    /// | `CORS_MODE`                | `permissive` |
    /// | `CORS_ORIGINS`             | empty        |
    /// | `STATIC_DIR`               | unset        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`         |
    /// | `LOG_FORMAT`               | `pretty`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(get("PORT"), "PORT", "a port number", 3000u16)?;
        let database_url = get("DATABASE_URL");
        let max_db_connections = parse_or(
            get("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            "a positive integer",
            10u32,
        )?;
        let request_timeout_secs = parse_or(
            get("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            "a number of seconds",
            30u64,
        )?;
        let static_dir = get("STATIC_DIR").map(PathBuf::from);

        let cors = match get("CORS_MODE").as_deref() {
            None | Some("permissive") => CorsPolicy::Permissive,
            Some("restricted") => CorsPolicy::Restricted(parse_origins(get("CORS_ORIGINS"))?),
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "CORS_MODE",
                    expected: "'permissive' or 'restricted'",
                    value: other.to_string(),
                })
            }
        };

        let log_format = match get("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    expected: "'pretty' or 'json'",
                    value: other.to_string(),
                })
            }
        };

        if max_db_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                expected: "a positive integer",
                value: "0".into(),
            });
        }

        Ok(Self {
            host,
            port,
            database_url,
            max_db_connections,
            cors,
            static_dir,
            request_timeout_secs,
            log_format,
        })
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

/// Split comma-separated origins into header values.
fn parse_origins(raw: Option<String>) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::MissingOrigins);
    }
    Ok(origins)
}
