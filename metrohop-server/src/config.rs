//! Server configuration
//!
//! Every field has a default, so the server runs with no config file at
//! all. A TOML file overrides the defaults and the CLI overrides both.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Upper bound on concurrently served requests
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            request_timeout_secs: 30,
            max_concurrent_requests: 256,
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
