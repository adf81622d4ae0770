//! Command-line driver for the token ledger.

pub mod commands;
pub mod config;
pub mod errors;
pub mod identity;
pub mod script;

// Re-export commonly used types and functions
pub use commands::{address, init_config, run};
pub use config::LedgerConfig;
pub use errors::CliError;
pub use script::Script;
