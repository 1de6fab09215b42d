use crate::conf::types::{Origin, PprofConfig};
use crate::conf::validation::report::ValidationReport;
use std::path::Path;

pub fn validate_pprof(cfg: &PprofConfig, source: &Path, report: &mut ValidationReport) {
    if cfg.enable && cfg.address.is_none() {
        report.pprof_without_address(Origin::new(source, "static_resources.pprofConf", None));
    }
}
