//! Commands for the ledger CLI.

pub mod address;
pub mod init_config;
pub mod run;
