use crate::conf::types::{Cluster, Origin};
use crate::conf::validation::report::ValidationReport;
use std::collections::HashSet;
use std::path::Path;

const SECTION: &str = "static_resources.clusters";

/// Validate static cluster definitions.
///
/// Duplicate names are fatal: `exist_cluster` only answers existence, so two
/// clusters sharing a name would make every lookup ambiguous.
pub fn validate_clusters(clusters: &[Cluster], source: &Path, report: &mut ValidationReport) {
    let mut seen = HashSet::new();

    for (i, cluster) in clusters.iter().enumerate() {
        let origin = Origin::new(source, SECTION, Some(i));

        if !seen.insert(cluster.name.as_str()) {
            report.duplicate_cluster(&cluster.name, origin.clone());
        }

        if let Err(e) = cluster.timeout.resolve() {
            report.invalid_duration(e.to_string(), origin);
        }
    }
}
