use clap::{Parser, Subcommand};
use portico_core::cli::conf::{self, ConfigCmd, DEFAULT_CONFIG_PATH};
use portico_core::conf::load_bootstrap;
use portico_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "portico",
    version,
    about = "Portico: gateway bootstrap configuration tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bootstrap configuration tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Load the bootstrap file and log what startup would see (default)
    Load {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH, env = "PORTICO_CONFIG")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Conf { cmd }) => conf::run(cmd),
        Some(Command::Load { config }) => {
            init_logging();
            load(config)
        }
        None => {
            init_logging();
            load(PathBuf::from(DEFAULT_CONFIG_PATH))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load(config: PathBuf) -> anyhow::Result<()> {
    let cfg = load_bootstrap(&config)?;
    for listener in cfg.bootstrap.listeners() {
        tracing::info!(listener = %listener.name, "static listener");
    }
    for (cluster, timeouts) in cfg.bootstrap.clusters().iter().zip(&cfg.cluster_timeouts) {
        tracing::info!(
            cluster = %cluster.name,
            connect_timeout_ms = timeouts.connect.as_millis() as u64,
            request_timeout_ms = timeouts.request.as_millis() as u64,
            "static cluster"
        );
    }
    tracing::info!(
        timeout_ms = cfg.shutdown.timeout.as_millis() as u64,
        step_timeout_ms = cfg.shutdown.step_timeout.as_millis() as u64,
        reject_policy = %cfg.shutdown.reject_policy,
        "shutdown policy"
    );
    Ok(())
}
