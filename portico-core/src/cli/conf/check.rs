use crate::conf::{ConfigError, load_bootstrap};
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool, json: bool) -> anyhow::Result<()> {
    match load_bootstrap(&path) {
        Ok(cfg) => {
            if json {
                println!("{}", cfg.report.to_json()?);
                return Ok(());
            }

            let b = &cfg.bootstrap;
            println!("✔ Config loaded successfully");
            println!("✔ {} listeners", b.listeners().len());
            println!("✔ {} clusters", b.clusters().len());
            println!("✔ {} adapters", b.adapters().len());
            println!(
                "✔ shutdown: timeout {:?}, step {:?}, reject policy {}",
                cfg.shutdown.timeout, cfg.shutdown.step_timeout, cfg.shutdown.reject_policy
            );
            if !b.dynamic_resources().is_empty() {
                println!("✔ dynamic resources configured");
            }

            if cfg.report.has_violations() {
                println!();
                if plain {
                    cfg.report.render_plain();
                } else {
                    cfg.report.render_pretty();
                }
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain, json)?;
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool, json: bool) -> anyhow::Result<()> {
    match err.report() {
        Some(report) if json => println!("{}", report.to_json()?),
        Some(report) if plain => report.render_plain(),
        Some(report) => report.render_pretty(),
        None => eprintln!("{}", err),
    }

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::UnsupportedFormat { .. } => Some(
            "Bootstrap files are read as YAML (.yaml, .yml) or JSON (.json).\n\
             \n\
             Rename the file or convert it to one of these formats.",
        ),

        ConfigError::ConflictingDiscoveryModes => Some(
            "A config source selects exactly one discovery mode.\n\
             \n\
             Example:\n\
             \n\
             cds_config:\n\
             \x20 ads: {}\n\
             \n\
             or\n\
             \n\
             cds_config:\n\
             \x20 api_config_source:\n\
             \x20   api_type: 0\n\
             \x20   grpc_services:\n\
             \x20     cluster_name: xds",
        ),

        ConfigError::MissingDiscoveryMode => Some(
            "Remove the empty block, or add either `ads: {}` or an `api_config_source`.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
