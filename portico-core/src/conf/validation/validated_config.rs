use crate::conf::types::{Bootstrap, Cluster, ConnectionTimeouts, ShutdownPolicy};
use crate::conf::validation::report::ValidationReport;

/// A bootstrap that passed validation, with its durations already parsed.
#[derive(Debug)]
pub struct ValidatedBootstrap {
    pub bootstrap: Bootstrap,
    pub shutdown: ShutdownPolicy,
    /// Parallel to `bootstrap.static_resources.clusters`.
    pub cluster_timeouts: Vec<ConnectionTimeouts>,
    /// Warnings only; a report with errors never gets this far.
    pub report: ValidationReport,
}

impl ValidatedBootstrap {
    pub fn timeouts_for(&self, cluster: &str) -> Option<ConnectionTimeouts> {
        self.bootstrap
            .clusters()
            .iter()
            .position(|c: &Cluster| c.name == cluster)
            .and_then(|i| self.cluster_timeouts.get(i).copied())
    }
}
