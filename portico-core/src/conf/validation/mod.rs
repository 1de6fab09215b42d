mod report;
mod validate;
mod validated_config;
pub mod validator;

pub use report::*;
pub use validate::validate_bootstrap;
pub use validated_config::ValidatedBootstrap;
