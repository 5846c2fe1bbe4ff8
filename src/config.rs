//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default byte budget: 64 MiB
pub const DEFAULT_MAX_BYTES: u64 = 64 * 1024 * 1024;

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Byte budget for keys plus values, 0 = unbounded
    pub max_bytes: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_BYTES` - Cache byte budget, 0 disables eviction (default: 67108864)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unset or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            max_bytes: env_or("MAX_BYTES", DEFAULT_MAX_BYTES),
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
