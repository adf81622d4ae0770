//! Address command for the ledger CLI.

use crate::errors::CliError;
use crate::identity::parse_identity;
use ledger_core::Address;
use tracing::debug;

/// Runs the address command.
pub fn run(identity: &str) -> Result<Address, CliError> {
    let address = parse_identity(identity)?;
    debug!("Resolved identity {} to {}", identity, hex::encode(address));
    Ok(address)
}
