use crate::conf::types::{DynamicResources, Origin, StaticResources};
use crate::conf::validation::report::ValidationReport;
use std::path::Path;

/// Validate discovery wiring.
///
/// Unknown transport codes are errors. References that do not resolve are
/// only warnings, since the discovery client decides what to do with them.
pub fn validate_dynamic_resources(
    dynamic: &DynamicResources,
    statics: &StaticResources,
    source: &Path,
    report: &mut ValidationReport,
) {
    for (category, api) in dynamic.api_sources() {
        let origin = Origin::new(source, &format!("dynamic_resources.{category}"), None);

        if api.api_type().is_err() {
            report.invalid_api_type(api.api_type_code(), origin.clone());
        }

        let cluster_name = api.cluster_name();
        if !cluster_name.is_empty() && !statics.exist_cluster(cluster_name) {
            report.unknown_discovery_cluster(cluster_name, origin);
        }
    }

    if dynamic.ads_config().is_none() {
        for (category, config_source) in dynamic.categories() {
            if config_source.is_aggregated() {
                report.aggregated_without_ads(
                    category,
                    Origin::new(source, &format!("dynamic_resources.{category}"), None),
                );
            }
        }
    }
}
