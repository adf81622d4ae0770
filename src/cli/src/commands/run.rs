//! Run command for the ledger CLI.
//!
//! Creates a fresh ledger, applies a script's operations in order and reports
//! the outcome of each one together with the final balances.

use crate::config::LedgerConfig;
use crate::errors::CliError;
use crate::identity::{format_address, parse_identity};
use crate::script::{Expectations, Names, Script};
use colored::Colorize;
use ledger_core::{
    Address, Ledger, LedgerError, LedgerEvent, LedgerMsg, LedgerSnapshot, SharedLedger, TokenInfo,
};
use std::path::Path;
use tracing::{info, warn};

/// Result of applying one scripted operation.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The operation that was applied
    pub msg: LedgerMsg,
    /// Its receipt, or the reason it was rejected
    pub result: Result<LedgerEvent, LedgerError>,
}

/// Everything the run command produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Token metadata of the ledger
    pub token: TokenInfo,
    /// Outcome per operation, in script order
    pub outcomes: Vec<Outcome>,
    /// Ledger state after the last operation
    pub snapshot: LedgerSnapshot,
    /// Display names of the identities used by the script
    pub names: Names,
}

impl RunReport {
    /// Number of rejected operations.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Checks the final state against the script's expectations.
    pub fn check(&self, expect: &Expectations) -> Result<(), CliError> {
        if let Some(supply) = expect.total_supply {
            if supply != self.snapshot.total_supply {
                return Err(CliError::ExpectationFailed(format!(
                    "total supply is {}, expected {}",
                    self.snapshot.total_supply, supply
                )));
            }
        }

        for (identity, expected) in &expect.balances {
            let addr = parse_identity(identity)?;
            let actual = self.snapshot.balances.get(&addr).copied().unwrap_or(0);
            if actual != *expected {
                return Err(CliError::ExpectationFailed(format!(
                    "balance of {} is {}, expected {}",
                    identity, actual, expected
                )));
            }
        }

        Ok(())
    }

    fn display_name(&self, addr: &Address) -> String {
        match self.names.name_of(addr) {
            Some(name) => name.to_string(),
            None => format_address(addr),
        }
    }
}

/// Applies `script` to a new ledger owned by `owner`.
pub fn execute(owner: Address, token: TokenInfo, script: &Script) -> Result<RunReport, CliError> {
    let mut names = Names::default();
    let msgs = script.messages(&mut names)?;

    let ledger = SharedLedger::new(Ledger::with_token(owner, token.clone()));
    let outcomes = msgs
        .into_iter()
        .map(|msg| {
            let result = ledger.apply(&msg);
            if let Err(e) = &result {
                warn!("Rejected {}: {}", msg, e);
            }
            Outcome { msg, result }
        })
        .collect();

    Ok(RunReport {
        token,
        outcomes,
        snapshot: ledger.snapshot(),
        names,
    })
}

/// Runs the run command.
pub fn run<P: AsRef<Path>>(
    config: &LedgerConfig,
    script_path: P,
    strict: bool,
) -> Result<RunReport, CliError> {
    let script_path = script_path.as_ref();
    let script = Script::from_file(script_path)?;
    info!(
        "Replaying {} operation(s) from {}",
        script.operations.len(),
        script_path.display()
    );

    let owner = config.owner_address()?;
    let report = execute(owner, config.token.clone(), &script)?;
    print_report(&report);

    report.check(&script.expect)?;
    if strict && report.rejected() > 0 {
        return Err(CliError::OperationsRejected(report.rejected()));
    }

    Ok(report)
}

fn print_report(report: &RunReport) {
    println!("{} {}", "Token:".green(), report.token);

    for (i, outcome) in report.outcomes.iter().enumerate() {
        match &outcome.result {
            Ok(event) => println!("{:>4} {} {}", i + 1, "ok".green(), event),
            Err(e) => println!("{:>4} {} {}: {}", i + 1, "rejected".red(), outcome.msg, e),
        }
    }

    println!("{} {}", "Total supply:".green(), report.snapshot.total_supply);
    for (addr, balance) in &report.snapshot.balances {
        println!("  {} {}", report.display_name(addr), balance);
    }
}
