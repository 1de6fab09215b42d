use portico_core::conf::{ConfigError, ValidatedBootstrap, load_bootstrap};
use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> Result<ValidatedBootstrap, ConfigError> {
    load_bootstrap(&fixture_path(file))
}

/// Copies a fixture into `dir` under `name`, so a test can rewrite it.
pub fn stage_fixture(file: &str, dir: &Path, name: &str) -> PathBuf {
    let target = dir.join(name);
    fs::copy(fixture_path(file), &target).expect("failed to stage fixture");
    target
}
