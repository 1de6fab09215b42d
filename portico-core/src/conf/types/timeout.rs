use crate::conf::error::ConfigError;
use crate::conf::types::parse_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-connection timing policy used by clusters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeoutConfig {
    /// Timeout for connecting to a cluster node.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl TimeoutConfig {
    pub fn resolve(&self) -> Result<ConnectionTimeouts, ConfigError> {
        Ok(ConnectionTimeouts {
            connect: parse_duration("connect_timeout", &self.connect_timeout)?,
            request: parse_duration("request_timeout", &self.request_timeout)?,
        })
    }
}

/// `TimeoutConfig` after duration parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

fn default_connect_timeout() -> String {
    "5s".to_string()
}

fn default_request_timeout() -> String {
    "10s".to_string()
}
