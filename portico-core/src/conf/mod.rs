mod error;
mod loader;
mod parse;
mod store;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorKind};
pub use loader::{load_bootstrap, load_bootstrap_str, load_document};
pub use parse::{DocumentFormat, encode_bootstrap, parse_bootstrap};
pub use store::BootstrapStore;
pub use types::Bootstrap;
pub use validation::{ValidatedBootstrap, ValidationReport, validate_bootstrap};
