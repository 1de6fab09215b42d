use serde::{Deserialize, Serialize};

pub const DEFAULT_API_CONFIG_PATH: &str = "/portico/config/api";

/// Where the remote API config source lives, e.g. a file or a key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiMetaConfig {
    #[serde(default)]
    pub address: String,

    #[serde(default = "default_api_config_path")]
    pub api_config_path: String,
}

impl Default for ApiMetaConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            api_config_path: default_api_config_path(),
        }
    }
}

fn default_api_config_path() -> String {
    DEFAULT_API_CONFIG_PATH.to_string()
}
