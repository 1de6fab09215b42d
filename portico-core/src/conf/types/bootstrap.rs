use crate::conf::types::{
    Adapter, Cluster, DynamicResources, Listener, MetricConfig, PprofConfig, ShutdownConfig,
    StaticResources,
};
use serde::{Deserialize, Serialize};

/// Root of the bootstrap document.
///
/// Built once by the loader and never mutated afterwards. Share it behind an
/// `Arc` (or a [`crate::conf::BootstrapStore`]) instead of a global.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub static_resources: StaticResources,

    #[serde(default)]
    pub dynamic_resources: DynamicResources,

    #[serde(default)]
    pub metric: MetricConfig,
}

impl Bootstrap {
    pub fn static_resources(&self) -> &StaticResources {
        &self.static_resources
    }

    pub fn dynamic_resources(&self) -> &DynamicResources {
        &self.dynamic_resources
    }

    pub fn metric(&self) -> &MetricConfig {
        &self.metric
    }

    pub fn listeners(&self) -> &[Listener] {
        self.static_resources.listeners()
    }

    /// Same as [`Bootstrap::listeners`]; kept for callers that distinguish
    /// static listeners from discovered ones.
    pub fn static_listeners(&self) -> &[Listener] {
        self.static_resources.listeners()
    }

    pub fn clusters(&self) -> &[Cluster] {
        self.static_resources.clusters()
    }

    pub fn adapters(&self) -> &[Adapter] {
        self.static_resources.adapters()
    }

    pub fn shutdown_config(&self) -> &ShutdownConfig {
        self.static_resources.shutdown_config()
    }

    pub fn pprof(&self) -> &PprofConfig {
        self.static_resources.pprof()
    }

    pub fn exist_cluster(&self, name: &str) -> bool {
        self.static_resources.exist_cluster(name)
    }
}
