use crate::conf::types::Bootstrap;
use crate::conf::validation::report::ValidationReport;
use crate::conf::validation::validator;
use std::path::Path;

/// Validate everything that exists in a decoded bootstrap document.
///
/// `source` is only used to label issues.
pub fn validate_bootstrap(bootstrap: &Bootstrap, source: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let statics = bootstrap.static_resources();
    validator::validate_clusters(statics.clusters(), source, &mut report);
    validator::validate_shutdown(statics.shutdown_config(), source, &mut report);
    validator::validate_pprof(statics.pprof(), source, &mut report);
    validator::validate_dynamic_resources(
        bootstrap.dynamic_resources(),
        statics,
        source,
        &mut report,
    );

    report
}
