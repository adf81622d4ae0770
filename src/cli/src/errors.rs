//! Error types for the ledger CLI.

use ledger_core::LedgerError;
use thiserror::Error;

/// Errors that can occur in the ledger CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when a file operation fails.
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error when an identity string cannot be turned into an address.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    /// Error when the configuration is unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error when a ledger operation is rejected.
    #[error("Ledger error: {0}")]
    LedgerError(#[from] LedgerError),

    /// Error when the final state does not match the script's expectations.
    #[error("Expectation failed: {0}")]
    ExpectationFailed(String),

    /// Error when operations were rejected in strict mode.
    #[error("{0} operation(s) rejected")]
    OperationsRejected(usize),
}
