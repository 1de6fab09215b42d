use crate::conf::error::ConfigError;
use crate::conf::types::parse_duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_SHUTDOWN_TIMEOUT: &str = "60s";
pub const DEFAULT_SHUTDOWN_STEP_TIMEOUT: &str = "10s";
pub const DEFAULT_REJECT_POLICY: &str = "immediacy";

/// How the gateway drains on shutdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShutdownConfig {
    /// Total drain budget.
    #[serde(default = "default_timeout")]
    pub timeout: String,

    /// Budget for each drain stage. Must not exceed `timeout`.
    #[serde(default = "default_step_timeout")]
    pub step_timeout: String,

    #[serde(default)]
    pub reject_policy: RejectPolicy,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            step_timeout: default_step_timeout(),
            reject_policy: RejectPolicy::default(),
        }
    }
}

impl ShutdownConfig {
    /// Parses both budgets and checks that a single step fits in the total.
    pub fn resolve(&self) -> Result<ShutdownPolicy, ConfigError> {
        let timeout = parse_duration("shutdown_config.timeout", &self.timeout)?;
        let step_timeout = parse_duration("shutdown_config.step_timeout", &self.step_timeout)?;

        if step_timeout > timeout {
            return Err(ConfigError::StepTimeoutExceedsTimeout {
                step_timeout: self.step_timeout.clone(),
                timeout: self.timeout.clone(),
            });
        }

        Ok(ShutdownPolicy {
            timeout,
            step_timeout,
            reject_policy: self.reject_policy.clone(),
        })
    }
}

/// What to do with new work once draining has started.
///
/// `immediacy` is the only policy known here. Any other name is passed to the
/// shutdown orchestrator as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RejectPolicy {
    #[default]
    Immediacy,
    Named(String),
}

impl RejectPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Immediacy => DEFAULT_REJECT_POLICY,
            Self::Named(name) => name,
        }
    }
}

impl From<String> for RejectPolicy {
    fn from(value: String) -> Self {
        if value == DEFAULT_REJECT_POLICY {
            Self::Immediacy
        } else {
            Self::Named(value)
        }
    }
}

impl From<RejectPolicy> for String {
    fn from(policy: RejectPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for RejectPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ShutdownConfig` after duration parsing, handed to the drain orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownPolicy {
    pub timeout: Duration,
    pub step_timeout: Duration,
    pub reject_policy: RejectPolicy,
}

fn default_timeout() -> String {
    DEFAULT_SHUTDOWN_TIMEOUT.to_string()
}

fn default_step_timeout() -> String {
    DEFAULT_SHUTDOWN_STEP_TIMEOUT.to_string()
}
