use crate::conf::error::ConfigError;
use crate::conf::types::ApiType;
use serde::{Deserialize, Serialize};

/// Names the static cluster that serves a discovery API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GrpcService {
    #[serde(default)]
    pub cluster_name: String,
}

/// A direct discovery endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfigSource {
    // Raw wire value. Any int32 decodes; `api_type()` resolves it.
    #[serde(default)]
    api_type: i32,

    #[serde(default)]
    pub transport_api_version: String,

    #[serde(default, rename = "grpc_services")]
    pub grpc_service: GrpcService,
}

impl ApiConfigSource {
    pub fn new(
        api_type: ApiType,
        transport_api_version: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> Self {
        Self {
            api_type: api_type.code(),
            transport_api_version: transport_api_version.into(),
            grpc_service: GrpcService {
                cluster_name: cluster_name.into(),
            },
        }
    }

    /// Resolves the transport, failing with `InvalidEnum` for unknown codes.
    pub fn api_type(&self) -> Result<ApiType, ConfigError> {
        ApiType::try_from(self.api_type)
    }

    pub fn api_type_code(&self) -> i32 {
        self.api_type
    }

    pub fn cluster_name(&self) -> &str {
        &self.grpc_service.cluster_name
    }
}

/// Marker selecting the aggregated discovery stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AggregatedConfigSource {}

/// How one resource category is discovered.
///
/// In the document this is a block with either an `api_config_source` key or
/// an `ads` key. Exactly one must be present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "ConfigSourceDocument", into = "ConfigSourceDocument")]
pub enum ConfigSource {
    Direct(ApiConfigSource),
    Aggregated(AggregatedConfigSource),
}

impl ConfigSource {
    pub fn direct(&self) -> Option<&ApiConfigSource> {
        match self {
            Self::Direct(api) => Some(api),
            Self::Aggregated(_) => None,
        }
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self, Self::Aggregated(_))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct ConfigSourceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_config_source: Option<ApiConfigSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ads: Option<AggregatedConfigSource>,
}

impl TryFrom<ConfigSourceDocument> for ConfigSource {
    type Error = ConfigError;

    fn try_from(doc: ConfigSourceDocument) -> Result<Self, Self::Error> {
        match (doc.api_config_source, doc.ads) {
            (Some(api), None) => Ok(Self::Direct(api)),
            (None, Some(ads)) => Ok(Self::Aggregated(ads)),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingDiscoveryModes),
            (None, None) => Err(ConfigError::MissingDiscoveryMode),
        }
    }
}

impl From<ConfigSource> for ConfigSourceDocument {
    fn from(source: ConfigSource) -> Self {
        match source {
            ConfigSource::Direct(api) => Self {
                api_config_source: Some(api),
                ads: None,
            },
            ConfigSource::Aggregated(ads) => Self {
                api_config_source: None,
                ads: Some(ads),
            },
        }
    }
}
