use crate::conf::types::{ApiConfigSource, ConfigSource};
use serde::{Deserialize, Serialize};

/// Discovery wiring for every dynamically fetched resource category.
///
/// `ads_config` is the endpoint of the aggregated stream. `cds_config` and
/// `lds_config` either name their own endpoint or select that stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DynamicResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ads_config: Option<ApiConfigSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cds_config: Option<ConfigSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lds_config: Option<ConfigSource>,
}

impl DynamicResources {
    pub fn ads_config(&self) -> Option<&ApiConfigSource> {
        self.ads_config.as_ref()
    }

    pub fn cds_config(&self) -> Option<&ConfigSource> {
        self.cds_config.as_ref()
    }

    pub fn lds_config(&self) -> Option<&ConfigSource> {
        self.lds_config.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.ads_config.is_none() && self.cds_config.is_none() && self.lds_config.is_none()
    }

    /// Per-category sources keyed by their document name.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &ConfigSource)> {
        [
            ("cds_config", self.cds_config.as_ref()),
            ("lds_config", self.lds_config.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, source)| source.map(|s| (name, s)))
    }

    /// Every direct endpoint, including the aggregated stream's own.
    pub fn api_sources(&self) -> impl Iterator<Item = (&'static str, &ApiConfigSource)> {
        self.ads_config
            .as_ref()
            .map(|ads| ("ads_config", ads))
            .into_iter()
            .chain(
                self.categories()
                    .filter_map(|(name, source)| source.direct().map(|api| (name, api))),
            )
    }
}
