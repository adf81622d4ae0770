//! Text form of holder identities.
//!
//! `0x` followed by 64 hex digits is a literal address. Anything else is a
//! label, and its address is the SHA-256 digest of the label bytes.

use crate::errors::CliError;
use ledger_core::Address;
use sha2::{Digest, Sha256};

/// Parses an identity string into an address.
pub fn parse_identity(text: &str) -> Result<Address, CliError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::InvalidIdentity("empty identity".to_string()));
    }

    match text.strip_prefix("0x") {
        Some(digits) => {
            let bytes = hex::decode(digits)
                .map_err(|e| CliError::InvalidIdentity(format!("{}: {}", text, e)))?;
            if bytes.len() != 32 {
                return Err(CliError::InvalidIdentity(format!(
                    "{}: expected 32 bytes, got {}",
                    text,
                    bytes.len()
                )));
            }
            let mut addr = [0u8; 32];
            addr.copy_from_slice(&bytes);
            Ok(addr)
        }
        None => Ok(address_from_label(text)),
    }
}

/// Derives the address of a named identity.
pub fn address_from_label(label: &str) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(label.as_bytes());
    let result = hasher.finalize();

    let mut addr = [0u8; 32];
    addr.copy_from_slice(&result);
    addr
}

/// Formats an address in its literal identity form.
pub fn format_address(addr: &Address) -> String {
    format!("0x{}", hex::encode(addr))
}
