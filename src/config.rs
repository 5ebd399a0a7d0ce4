//! Server configuration from environment variables.
//!
//! HOST (default 0.0.0.0), PORT (8080), INACTIVITY_TIMEOUT_HOURS (12),
//! CLEANUP_INTERVAL_MINUTES (30). Unset, empty or unparsable values fall back to the default.

use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments not accessed for this long are removed.
    pub inactivity_timeout: Duration,
    /// How often the cleanup task runs.
    pub cleanup_interval: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

const DEFAULT_INACTIVITY_HOURS: u64 = 12;
const DEFAULT_CLEANUP_MINUTES: u64 = 30;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_HOURS * 3600),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_MINUTES * 60),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let inactivity_secs = get("INACTIVITY_TIMEOUT_HOURS")
            .and_then(|v| v.parse::<u64>().ok())
            .and_then(|h| h.checked_mul(3600))
            .unwrap_or(DEFAULT_INACTIVITY_HOURS * 3600);
        let cleanup_secs = get("CLEANUP_INTERVAL_MINUTES")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|m| *m > 0)
            .and_then(|m| m.checked_mul(60))
            .unwrap_or(DEFAULT_CLEANUP_MINUTES * 60);
        Self {
            host: get("HOST").unwrap_or_else(default_host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            inactivity_timeout: Duration::from_secs(inactivity_secs),
            cleanup_interval: Duration::from_secs(cleanup_secs),
        }
    }
}
