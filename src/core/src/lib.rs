//! Core ledger for a single fungible token.
//!
//! This crate tracks per-holder balances and the total supply, and exposes the
//! three operations that change them: owner-only mint, transfer, and
//! self-service burn.

pub mod errors;
pub mod ledger;
pub mod shared;
pub mod types;

// Re-export commonly used types
pub use errors::LedgerError;
pub use ledger::Ledger;
pub use shared::{LedgerSnapshot, SharedLedger};
pub use types::{Address, Balance, LedgerEvent, LedgerMsg, TokenInfo};
