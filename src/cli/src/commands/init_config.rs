//! Init-config command for the ledger CLI.

use crate::config::LedgerConfig;
use crate::errors::CliError;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Runs the init-config command.
pub fn run<P: AsRef<Path>>(config_path: P, force: bool) -> Result<()> {
    let config_path = config_path.as_ref();

    // Check if the config file already exists
    if config_path.exists() && !force {
        return Err(CliError::ConfigError(format!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        ))
        .into());
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    LedgerConfig::default().to_file(config_path)?;
    info!("Configuration written to {}", config_path.display());

    Ok(())
}
