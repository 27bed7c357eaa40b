//! Configuration - built once at startup from `ZOO_*` environment variables

use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DEFAULT_DATABASE_URL: &str = "sqlite://zoo.sqlite?mode=rwc";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub seed_data: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            max_connections: 5,
            acquire_timeout_secs: 5,
            seed_data: true,
            debug: false,
        }
    }
}

impl Config {
    /// Loads the configuration from the environment
    /// Calls dotenv() automatically
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; missing keys take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();

        let database_url = lookup("ZOO_DATABASE_URL").unwrap_or_else(|| {
            warn!("ZOO_DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            defaults.database_url.clone()
        });

        let server_host = lookup("ZOO_HOST").unwrap_or(defaults.server_host);

        let server_port = parse(&lookup, "ZOO_PORT", defaults.server_port)
            .map_err(|_| "Invalid ZOO_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = parse(&lookup, "ZOO_MAX_DB_CONNECTIONS", defaults.max_connections)
            .map_err(|_| "Invalid ZOO_MAX_DB_CONNECTIONS: must be a positive number".to_string())?;
        if max_connections == 0 {
            return Err("Invalid ZOO_MAX_DB_CONNECTIONS: must be a positive number".to_string());
        }

        let acquire_timeout_secs =
            parse(&lookup, "ZOO_DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout_secs).map_err(
                |_| "Invalid ZOO_DB_ACQUIRE_TIMEOUT_SECS: must be a positive number".to_string(),
            )?;

        let seed_data = parse_flag(&lookup, "ZOO_SEED_DATA", defaults.seed_data)?;
        let debug = parse_flag(&lookup, "ZOO_DEBUG", defaults.debug)?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            acquire_timeout_secs,
            seed_data,
            debug,
        })
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "zoo=debug,tower_http=debug,sqlx=info"
        } else {
            "zoo=info,tower_http=info"
        }
    }

    /// Logs the configuration (hiding secrets)
    pub fn log_info(&self) {
        info!(
            address = %format!("{}:{}", self.server_host, self.server_port),
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            acquire_timeout_secs = self.acquire_timeout_secs,
            seed_data = self.seed_data,
            debug = self.debug,
            "Server configuration"
        );
    }

    /// Masks the credentials of a database URL for logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, T::Err> {
    match lookup(key) {
        Some(value) => value.trim().parse::<T>(),
        None => Ok(default),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, String> {
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(format!("Invalid {key}: expected a boolean, got `{v}`")),
    }
}
