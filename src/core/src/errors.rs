//! Error types for the ledger core.

use crate::types::{Address, Balance};
use thiserror::Error;

/// Errors returned by the ledger operations.
///
/// Every variant is recoverable: a rejected operation leaves the ledger
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Error when a privileged operation is requested by someone other than the owner.
    #[error("Unauthorized: {} is not the token owner", hex::encode(.caller))]
    Unauthorized {
        /// The identity that attempted the operation
        caller: Address,
    },

    /// Error when a debit exceeds the holder's recorded balance.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// The amount requested
        required: Balance,
        /// The balance actually held
        available: Balance,
    },

    /// Error when an addition would exceed the range of `Balance`.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}
