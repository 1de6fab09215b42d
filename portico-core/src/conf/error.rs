use crate::conf::validation::ValidationReport;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of [`ConfigError`] for callers that branch on the
/// failure class rather than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Io,
    DecodeFailure,
    InvalidEnum,
    DuplicateCluster,
    InvalidPolicy,
    Validation,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Decoding
    //-------------------------------------------------------------------------
    #[error("unsupported config file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid configuration file: {path}\n\n{source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode bootstrap as {format}: {reason}")]
    Encode { format: String, reason: String },

    #[error("invalid duration '{value}' for {field}: {reason}")]
    InvalidDuration {
        field: String,
        value: String,
        reason: String,
    },

    #[error("config source sets both 'api_config_source' and 'ads'; choose one discovery mode")]
    ConflictingDiscoveryModes,

    #[error("config source sets neither 'api_config_source' nor 'ads'")]
    MissingDiscoveryMode,

    //-------------------------------------------------------------------------
    // Semantics
    //-------------------------------------------------------------------------
    #[error("invalid value {value} for {field}")]
    InvalidEnum { field: &'static str, value: i32 },

    #[error("duplicate cluster definition: {name}")]
    DuplicateCluster { name: String },

    #[error("shutdown step_timeout '{step_timeout}' exceeds timeout '{timeout}'")]
    StepTimeoutExceedsTimeout {
        step_timeout: String,
        timeout: String,
    },

    #[error("config validation failed ({} errors, {} warnings)", .report.errors.len(), .report.warnings.len())]
    Validation { report: ValidationReport },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse_yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ParseYaml {
            path: path.into(),
            source,
        }
    }

    pub fn parse_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseJson {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReadFile { .. } => ErrorKind::Io,
            Self::UnsupportedFormat { .. }
            | Self::ParseYaml { .. }
            | Self::ParseJson { .. }
            | Self::Encode { .. }
            | Self::InvalidDuration { .. }
            | Self::ConflictingDiscoveryModes
            | Self::MissingDiscoveryMode => ErrorKind::DecodeFailure,
            Self::InvalidEnum { .. } => ErrorKind::InvalidEnum,
            Self::DuplicateCluster { .. } => ErrorKind::DuplicateCluster,
            Self::StepTimeoutExceedsTimeout { .. } => ErrorKind::InvalidPolicy,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// The validation report, when this error came out of the validation pass.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Validation { report } => Some(report),
            _ => None,
        }
    }
}
