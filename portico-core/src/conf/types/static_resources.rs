use crate::conf::types::{Adapter, Cluster, Listener, PprofConfig, ShutdownConfig};
use serde::{Deserialize, Serialize};

/// Everything declared statically in the bootstrap document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StaticResources {
    #[serde(default)]
    pub listeners: Vec<Listener>,

    #[serde(default)]
    pub clusters: Vec<Cluster>,

    #[serde(default)]
    pub adapters: Vec<Adapter>,

    /// Falls back to the default drain policy when the block is absent.
    #[serde(default)]
    pub shutdown_config: ShutdownConfig,

    #[serde(default, rename = "pprofConf")]
    pub pprof: PprofConfig,
}

impl StaticResources {
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn adapters(&self) -> &[Adapter] {
        &self.adapters
    }

    pub fn shutdown_config(&self) -> &ShutdownConfig {
        &self.shutdown_config
    }

    pub fn pprof(&self) -> &PprofConfig {
        &self.pprof
    }

    /// Whether a cluster with exactly this name is declared.
    ///
    /// Case-sensitive linear scan. Cluster counts are small and this is only
    /// called during startup.
    pub fn exist_cluster(&self, name: &str) -> bool {
        self.clusters.iter().any(|c| c.name == name)
    }

    pub fn cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.name == name)
    }
}
