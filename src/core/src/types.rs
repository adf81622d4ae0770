//! Core types for the token ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte holder identity. The ledger treats it as an opaque key.
pub type Address = [u8; 32];

/// Token balance, represented as a 128-bit unsigned integer.
pub type Balance = u128;

/// Descriptive metadata of the token managed by a ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Human readable token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Number of decimals used when displaying amounts
    pub decimals: u8,
}

impl Default for TokenInfo {
    fn default() -> Self {
        Self {
            name: "AvaOne".to_string(),
            symbol: "AVAO".to_string(),
            decimals: 18,
        }
    }
}

/// A mutating ledger operation in message form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerMsg {
    /// Create new tokens (owner only).
    Mint {
        /// The identity requesting the mint
        caller: Address,
        /// The recipient of the new tokens
        to: Address,
        /// The amount to mint
        amount: Balance,
    },

    /// Move tokens between two holders.
    Transfer {
        /// The sender
        from: Address,
        /// The recipient
        to: Address,
        /// The amount to transfer
        amount: Balance,
    },

    /// Destroy tokens held by the caller.
    Burn {
        /// The holder burning their own tokens
        from: Address,
        /// The amount to burn
        amount: Balance,
    },
}

/// Receipt of a successful operation.
///
/// A mint has no `from`, a burn has no `to`, a transfer has both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// The debited holder, if any
    pub from: Option<Address>,
    /// The credited holder, if any
    pub to: Option<Address>,
    /// The amount moved
    pub amount: Balance,
}

impl LedgerEvent {
    pub(crate) fn minted(to: Address, amount: Balance) -> Self {
        Self { from: None, to: Some(to), amount }
    }

    pub(crate) fn transferred(from: Address, to: Address, amount: Balance) -> Self {
        Self { from: Some(from), to: Some(to), amount }
    }

    pub(crate) fn burned(from: Address, amount: Balance) -> Self {
        Self { from: Some(from), to: None, amount }
    }
}

/// Formats an address as a shortened hex string for log and display output.
pub fn short_hex(addr: &Address) -> String {
    let full = hex::encode(addr);
    format!("0x{}..{}", &full[..8], &full[full.len() - 4..])
}

fn endpoint(addr: &Option<Address>) -> String {
    match addr {
        Some(addr) => short_hex(addr),
        None => "-".to_string(),
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} decimals)", self.name, self.symbol, self.decimals)
    }
}

impl fmt::Display for LedgerMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerMsg::Mint { caller, to, amount } => write!(
                f,
                "Mint {{ caller: {}, to: {}, amount: {} }}",
                short_hex(caller),
                short_hex(to),
                amount
            ),
            LedgerMsg::Transfer { from, to, amount } => write!(
                f,
                "Transfer {{ from: {}, to: {}, amount: {} }}",
                short_hex(from),
                short_hex(to),
                amount
            ),
            LedgerMsg::Burn { from, amount } => write!(
                f,
                "Burn {{ from: {}, amount: {} }}",
                short_hex(from),
                amount
            ),
        }
    }
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer {{ from: {}, to: {}, amount: {} }}",
            endpoint(&self.from),
            endpoint(&self.to),
            self.amount
        )
    }
}
