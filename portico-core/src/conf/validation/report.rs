use crate::conf::error::ErrorKind;
use crate::conf::types::Origin;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    pub message: String,
    pub origin: Origin,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn error(
        &mut self,
        kind: ErrorKind,
        message: String,
        origin: Origin,
        help: Option<String>,
    ) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            kind: Some(kind),
            message,
            origin,
            help,
        });
    }

    pub(crate) fn warning(&mut self, message: String, origin: Origin, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            kind: None,
            message,
            origin,
            help,
        });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };
        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            println!(
                "{}:{}:{}: {}",
                issue.origin.file.display(),
                issue.origin,
                severity,
                issue.message
            );

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        let errors = self.errors.len();
        let warnings = self.warnings.len();

        if errors > 0 || warnings > 0 {
            println!(
                "configuration validation failed ({} errors, {} warnings)\n",
                errors, warnings
            );
        }

        let mut by_file = BTreeMap::new();
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            by_file
                .entry(&issue.origin.file)
                .or_insert(Vec::new())
                .push(issue);
        }

        for (file, issues) in by_file {
            println!("{}", file.display());

            for issue in issues {
                match issue.severity {
                    Severity::Error => {
                        println!(
                            "  {} [{}]: {}",
                            "error".red().bold(),
                            issue.origin,
                            issue.message
                        );
                    }
                    Severity::Warning => {
                        println!(
                            "  {} [{}]: {}",
                            "warning".yellow().bold(),
                            issue.origin,
                            issue.message
                        );
                    }
                }

                if let Some(help) = &issue.help {
                    println!("    {}: {}", "help".cyan(), help);
                }

                println!();
            }
        }
    }
}

/// Static Resources Validation
impl ValidationReport {
    pub fn duplicate_cluster(&mut self, name: &str, origin: Origin) {
        self.error(
            ErrorKind::DuplicateCluster,
            format!("duplicate cluster name: {}", name),
            origin,
            Some("Cluster names must be unique within static_resources.clusters.".to_string()),
        );
    }

    pub fn invalid_duration(&mut self, reason: String, origin: Origin) {
        self.error(
            ErrorKind::DecodeFailure,
            reason,
            origin,
            Some("Durations look like \"500ms\", \"10s\", \"1m30s\" or \"1h\".".to_string()),
        );
    }

    pub fn step_timeout_exceeds_timeout(
        &mut self,
        step_timeout: Duration,
        timeout: Duration,
        origin: Origin,
    ) {
        self.error(
            ErrorKind::InvalidPolicy,
            format!(
                "shutdown step_timeout ({:?}) exceeds timeout ({:?})",
                step_timeout, timeout
            ),
            origin,
            Some("Lower step_timeout or raise timeout so a single step fits the total drain budget.".to_string()),
        );
    }

    pub fn pprof_without_address(&mut self, origin: Origin) {
        self.warning(
            "pprof is enabled but no address is configured".to_string(),
            origin,
            None,
        );
    }
}

/// Dynamic Resources Validation
impl ValidationReport {
    pub fn invalid_api_type(&mut self, code: i32, origin: Origin) {
        self.error(
            ErrorKind::InvalidEnum,
            format!("invalid api_type: {}", code),
            origin,
            Some("Use 0 for GRPC or 1 for HTTP.".to_string()),
        );
    }

    pub fn unknown_discovery_cluster(&mut self, cluster_name: &str, origin: Origin) {
        self.warning(
            format!(
                "grpc_services.cluster_name '{}' does not name a static cluster",
                cluster_name
            ),
            origin,
            None,
        );
    }

    pub fn aggregated_without_ads(&mut self, category: &str, origin: Origin) {
        self.warning(
            format!("{} selects the aggregated stream but ads_config is not set", category),
            origin,
            Some("Declare dynamic_resources.ads_config or point this category at its own api_config_source.".to_string()),
        );
    }
}
