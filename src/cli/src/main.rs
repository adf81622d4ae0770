//! Command-line driver for the token ledger.

use anyhow::Result;
use colored::Colorize;
use ledger_cli::{address, identity::format_address, init_config, run, LedgerConfig};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments for the ledger CLI.
#[derive(Debug, StructOpt)]
#[structopt(name = "ledger", about = "Single-asset fungible token ledger")]
struct Opt {
    /// Path to the configuration file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: Command,
}

/// Subcommands for the ledger CLI.
#[derive(Debug, StructOpt)]
enum Command {
    /// Print the address an identity resolves to
    #[structopt(name = "address")]
    Address {
        /// Label or 0x-prefixed 32-byte hex address
        identity: String,
    },

    /// Write the default configuration file
    #[structopt(name = "init-config")]
    InitConfig {
        /// Where to write the configuration
        #[structopt(long, parse(from_os_str), default_value = "ledger.json")]
        out: PathBuf,

        /// Overwrite an existing file
        #[structopt(long)]
        force: bool,
    },

    /// Replay a JSON operation script against a new ledger
    #[structopt(name = "run")]
    Run {
        /// Path to the script
        #[structopt(parse(from_os_str))]
        script: PathBuf,

        /// Owner identity, overriding the configuration
        #[structopt(long)]
        owner: Option<String>,

        /// Fail if any operation is rejected
        #[structopt(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let opt = Opt::from_args();

    // Load configuration
    let mut config = match &opt.config {
        Some(path) => LedgerConfig::from_file(path)?,
        None => LedgerConfig::default(),
    };

    // Run the appropriate command
    match opt.cmd {
        Command::Address { identity } => {
            let addr = address::run(&identity)?;
            println!("{} {}", "Address:".green(), format_address(&addr));
        }
        Command::InitConfig { out, force } => {
            init_config::run(&out, force)?;
            println!("{} {}", "Configuration written:".green(), out.display());
        }
        Command::Run { script, owner, strict } => {
            // Override owner if specified
            if let Some(owner) = owner {
                config.owner = owner;
            }

            let report = run::run(&config, &script, strict)?;
            info!(
                "Applied {} of {} operation(s)",
                report.outcomes.len() - report.rejected(),
                report.outcomes.len()
            );
        }
    }

    Ok(())
}
