//! Configuration for the ledger CLI.

use crate::errors::CliError;
use crate::identity::parse_identity;
use anyhow::Result;
use ledger_core::{Address, TokenInfo};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the ledger CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Identity of the token owner (label or 0x-prefixed address)
    pub owner: String,
    /// Token metadata
    #[serde(default)]
    pub token: TokenInfo,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            owner: "owner".to_string(),
            token: TokenInfo::default(),
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolves the configured owner identity.
    pub fn owner_address(&self) -> Result<Address, CliError> {
        parse_identity(&self.owner)
            .map_err(|e| CliError::ConfigError(format!("owner: {}", e)))
    }
}
