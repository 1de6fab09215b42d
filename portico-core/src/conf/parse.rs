use crate::conf::error::ConfigError;
use crate::conf::types::Bootstrap;
use std::fmt;
use std::path::Path;

/// Encoding of a bootstrap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("yaml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Decodes a bootstrap document. `source` only labels errors.
pub fn parse_bootstrap(
    source: &Path,
    contents: &str,
    format: DocumentFormat,
) -> Result<Bootstrap, ConfigError> {
    match format {
        DocumentFormat::Yaml => {
            // An empty YAML file is a null document, which serde_yaml refuses to
            // turn into a struct.
            if contents.trim().is_empty() {
                return Ok(Bootstrap::default());
            }
            serde_yaml::from_str(contents).map_err(|e| ConfigError::parse_yaml(source, e))
        }
        DocumentFormat::Json => {
            serde_json::from_str(contents).map_err(|e| ConfigError::parse_json(source, e))
        }
    }
}

/// Encodes a bootstrap back into document form.
pub fn encode_bootstrap(
    bootstrap: &Bootstrap,
    format: DocumentFormat,
) -> Result<String, ConfigError> {
    let encoded = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(bootstrap).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::to_string_pretty(bootstrap).map_err(|e| e.to_string()),
    };
    encoded.map_err(|reason| ConfigError::Encode {
        format: format.to_string(),
        reason,
    })
}
