use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite anything
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(&path, BOOTSTRAP_YAML.trim_start())
        .with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Initialized bootstrap config at {}", path.display());
    println!();
    println!("Next steps:");
    println!("  portico conf check {}", path.display());

    Ok(())
}

pub const BOOTSTRAP_YAML: &str = r#"
static_resources:
  listeners:
    - name: net/http
      protocol_type: HTTP
      address:
        socket_address:
          address: 0.0.0.0
          port: 8888
  clusters:
    - name: user-service
      lb_policy: round_robin
      connect_timeout: 5s
      request_timeout: 10s
      endpoints:
        - socket_address:
            address: 127.0.0.1
            port: 1314
  adapters: []
  shutdown_config:
    timeout: 60s
    step_timeout: 10s
    reject_policy: immediacy
  pprofConf:
    enable: false

metric:
  enable: false
  prometheus_port: 2222
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::load_bootstrap;
    use tempfile::tempdir;

    #[test]
    fn init_writes_a_valid_bootstrap() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("config").join("portico.yaml");

        // Act
        init(path.clone()).unwrap();

        // Assert
        let cfg = load_bootstrap(&path).unwrap();
        assert!(cfg.report.warnings.is_empty());
        assert!(cfg.bootstrap.exist_cluster("user-service"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portico.yaml");
        fs::write(&path, "keep me").unwrap();

        assert!(init(path.clone()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }
}
