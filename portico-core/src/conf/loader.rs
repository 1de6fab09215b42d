use crate::conf::error::ConfigError;
use crate::conf::parse::{DocumentFormat, parse_bootstrap};
use crate::conf::types::{Bootstrap, ConnectionTimeouts};
use crate::conf::validation::{ValidatedBootstrap, validate_bootstrap};

use std::fs;
use std::path::Path;

/// Reads, decodes, validates and normalizes a bootstrap file.
pub fn load_bootstrap(path: &Path) -> Result<ValidatedBootstrap, ConfigError> {
    let format = DocumentFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    load_bootstrap_str(path, &contents, format)
}

/// Same as [`load_bootstrap`] for a document already in memory.
pub fn load_bootstrap_str(
    source: &Path,
    contents: &str,
    format: DocumentFormat,
) -> Result<ValidatedBootstrap, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: decoding
    //--------------------------------------------------------------------------
    let bootstrap = parse_bootstrap(source, contents, format)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    let report = validate_bootstrap(&bootstrap, source);
    if report.has_errors() {
        tracing::warn!(
            path = %source.display(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "bootstrap validation failed"
        );
        return Err(ConfigError::Validation { report });
    }
    for warning in &report.warnings {
        tracing::warn!(origin = %warning.origin, "{}", warning.message);
    }

    //--------------------------------------------------------------------------
    // Normalize durations
    //--------------------------------------------------------------------------
    let shutdown = bootstrap.shutdown_config().resolve()?;
    let cluster_timeouts = bootstrap
        .clusters()
        .iter()
        .map(|c| c.timeout.resolve())
        .collect::<Result<Vec<ConnectionTimeouts>, _>>()?;

    tracing::info!(
        path = %source.display(),
        listeners = bootstrap.listeners().len(),
        clusters = bootstrap.clusters().len(),
        adapters = bootstrap.adapters().len(),
        dynamic = !bootstrap.dynamic_resources().is_empty(),
        "bootstrap loaded"
    );

    Ok(ValidatedBootstrap {
        bootstrap,
        shutdown,
        cluster_timeouts,
        report,
    })
}

/// Reads and decodes a bootstrap file without validating it.
pub fn load_document(path: &Path) -> Result<Bootstrap, ConfigError> {
    let format = DocumentFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_bootstrap(path, &contents, format)
}
