use crate::conf::types::{Origin, ShutdownConfig, parse_duration};
use crate::conf::validation::report::ValidationReport;
use std::path::Path;
use std::time::Duration;

/// Validate the drain policy.
///
/// A step budget larger than the total budget is rejected. Equal budgets are
/// allowed.
pub fn validate_shutdown(cfg: &ShutdownConfig, source: &Path, report: &mut ValidationReport) {
    let origin = Origin::new(source, "static_resources.shutdown_config", None);

    let timeout = check_duration("shutdown_config.timeout", &cfg.timeout, &origin, report);
    let step_timeout = check_duration(
        "shutdown_config.step_timeout",
        &cfg.step_timeout,
        &origin,
        report,
    );

    if let (Some(timeout), Some(step_timeout)) = (timeout, step_timeout) {
        if step_timeout > timeout {
            report.step_timeout_exceeds_timeout(step_timeout, timeout, origin);
        }
    }
}

fn check_duration(
    field: &str,
    raw: &str,
    origin: &Origin,
    report: &mut ValidationReport,
) -> Option<Duration> {
    parse_duration(field, raw)
        .map_err(|e| report.invalid_duration(e.to_string(), origin.clone()))
        .ok()
}
