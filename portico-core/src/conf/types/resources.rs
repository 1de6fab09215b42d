use crate::conf::types::TimeoutConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subsystem-owned fields, kept verbatim.
pub type Properties = BTreeMap<String, serde_json::Value>;

/// A network entry point. Only the name is interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Listener {
    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub properties: Properties,
}

/// A named group of upstream destinations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    #[serde(default)]
    pub name: String,

    /// Connect and request timeouts, read from the cluster block itself.
    #[serde(flatten)]
    pub timeout: TimeoutConfig,

    #[serde(flatten)]
    pub properties: Properties,
}

/// A pluggable protocol or behavior extension.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Adapter {
    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub properties: Properties,
}

impl Listener {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Cluster {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Adapter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
