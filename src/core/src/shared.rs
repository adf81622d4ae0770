//! A thread-safe handle to a [`Ledger`].
//!
//! Mutating calls hold the write lock for the whole check-and-apply step, so
//! two of them can never interleave. Reads share the read lock and therefore
//! always observe a state between two complete operations.

use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::types::{Address, Balance, LedgerEvent, LedgerMsg};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Point-in-time copy of the ledger state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// The owner identity
    pub owner: Address,
    /// The total supply
    pub total_supply: Balance,
    /// Every recorded holder and its balance, ordered by address
    pub balances: BTreeMap<Address, Balance>,
}

/// Cloneable, shareable ledger handle.
#[derive(Clone, Debug)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wraps a ledger for shared use.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    // Ledger operations validate before mutating and never panic half-way,
    // so a poisoned lock still guards a consistent ledger.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Ledger::mint`].
    pub fn mint(
        &self,
        caller: &Address,
        to: &Address,
        amount: Balance,
    ) -> Result<LedgerEvent, LedgerError> {
        self.write().mint(caller, to, amount)
    }

    /// See [`Ledger::transfer`].
    pub fn transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: Balance,
    ) -> Result<LedgerEvent, LedgerError> {
        self.write().transfer(from, to, amount)
    }

    /// See [`Ledger::burn`].
    pub fn burn(&self, from: &Address, amount: Balance) -> Result<LedgerEvent, LedgerError> {
        self.write().burn(from, amount)
    }

    /// See [`Ledger::apply`].
    pub fn apply(&self, msg: &LedgerMsg) -> Result<LedgerEvent, LedgerError> {
        self.write().apply(msg)
    }

    pub fn balance_of(&self, holder: &Address) -> Balance {
        self.read().balance_of(holder)
    }

    pub fn total_supply(&self) -> Balance {
        self.read().total_supply()
    }

    /// Captures owner, supply and all balances under a single read lock.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let ledger = self.read();
        LedgerSnapshot {
            owner: ledger.owner(),
            total_supply: ledger.total_supply(),
            balances: ledger.holders().map(|(addr, bal)| (*addr, bal)).collect(),
        }
    }

    /// Runs `f` with shared access to the underlying ledger.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.read())
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}

impl LedgerSnapshot {
    /// Returns true if the recorded balances add up to the recorded supply.
    pub fn is_consistent(&self) -> bool {
        self.balances
            .values()
            .try_fold(0u128, |acc, bal| acc.checked_add(*bal))
            == Some(self.total_supply)
    }
}
