//! Operation scripts replayed by the `run` command.
//!
//! ```json
//! {
//!   "operations": [
//!     { "mint": { "caller": "owner", "to": "addr1", "amount": 100000000000 } },
//!     { "transfer": { "from": "addr1", "to": "addr2", "amount": 1000 } },
//!     { "burn": { "from": "addr2", "amount": 1000 } }
//!   ],
//!   "expect": { "total_supply": 99999999000, "balances": { "addr2": 0 } }
//! }
//! ```

use crate::errors::CliError;
use crate::identity::parse_identity;
use ledger_core::{Address, Balance, LedgerMsg};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single scripted operation, with identities in text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptOp {
    Mint {
        caller: String,
        to: String,
        amount: Balance,
    },
    Transfer {
        from: String,
        to: String,
        amount: Balance,
    },
    Burn {
        from: String,
        amount: Balance,
    },
}

/// Checks run against the ledger once every operation was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default)]
    pub total_supply: Option<Balance>,
    #[serde(default)]
    pub balances: BTreeMap<String, Balance>,
}

/// A sequence of operations plus optional expectations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub operations: Vec<ScriptOp>,
    #[serde(default)]
    pub expect: Expectations,
}

impl Script {
    /// Loads a script from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let script = serde_json::from_str(&contents)?;
        Ok(script)
    }

    /// Resolves every operation into a ledger message.
    ///
    /// Identities are resolved up front so a malformed script is rejected
    /// before anything is applied.
    pub fn messages(&self, names: &mut Names) -> Result<Vec<LedgerMsg>, CliError> {
        self.operations.iter().map(|op| op.resolve(names)).collect()
    }
}

impl ScriptOp {
    fn resolve(&self, names: &mut Names) -> Result<LedgerMsg, CliError> {
        let msg = match self {
            ScriptOp::Mint { caller, to, amount } => LedgerMsg::Mint {
                caller: names.resolve(caller)?,
                to: names.resolve(to)?,
                amount: *amount,
            },
            ScriptOp::Transfer { from, to, amount } => LedgerMsg::Transfer {
                from: names.resolve(from)?,
                to: names.resolve(to)?,
                amount: *amount,
            },
            ScriptOp::Burn { from, amount } => LedgerMsg::Burn {
                from: names.resolve(from)?,
                amount: *amount,
            },
        };
        Ok(msg)
    }
}

/// Remembers the text each address was written as, for reporting.
#[derive(Debug, Default, Clone)]
pub struct Names {
    by_address: HashMap<Address, String>,
}

impl Names {
    /// Parses `text` and records it as the display name of the address.
    pub fn resolve(&mut self, text: &str) -> Result<Address, CliError> {
        let addr = parse_identity(text)?;
        self.by_address
            .entry(addr)
            .or_insert_with(|| text.trim().to_string());
        Ok(addr)
    }

    /// Returns the recorded name of `addr`, if it appeared in the script.
    pub fn name_of(&self, addr: &Address) -> Option<&str> {
        self.by_address.get(addr).map(String::as_str)
    }
}
