mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/portico.yaml";

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate the bootstrap file and exit
    Check {
        /// Path to the bootstrap file (.yaml, .yml or .json)
        #[arg(default_value = DEFAULT_CONFIG_PATH, env = "PORTICO_CONFIG")]
        path: PathBuf,

        /// Print issues without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,

        /// Print the validation report as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Print the decoded bootstrap document
    Dump {
        #[arg(default_value = DEFAULT_CONFIG_PATH, env = "PORTICO_CONFIG")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter bootstrap file
    Init {
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain, json } => check(path, plain, json),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
        ConfigCmd::Init { path } => init(path),
    }
}
