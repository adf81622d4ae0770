//! The fungible token ledger.
//!
//! A [`Ledger`] owns the balance of every holder and the running total
//! supply. The only ways to change either are [`Ledger::mint`],
//! [`Ledger::transfer`] and [`Ledger::burn`]; each one validates all of its
//! preconditions before touching state, so a rejected call leaves the ledger
//! untouched and a successful call keeps
//! `total_supply == Σ balances` intact.

use crate::errors::LedgerError;
use crate::types::{short_hex, Address, Balance, LedgerEvent, LedgerMsg, TokenInfo};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Balances and total supply of a single fungible token.
#[derive(Clone)]
pub struct Ledger {
    /// The only identity allowed to mint
    owner: Address,
    /// Token metadata
    token: TokenInfo,
    /// Balance per holder; a missing entry means zero
    balances: HashMap<Address, Balance>,
    /// Sum of all balances
    total_supply: Balance,
}

impl Ledger {
    /// Creates an empty ledger owned by `owner`, with the default token metadata.
    pub fn new(owner: Address) -> Self {
        Self::with_token(owner, TokenInfo::default())
    }

    /// Creates an empty ledger owned by `owner` for the given token.
    pub fn with_token(owner: Address, token: TokenInfo) -> Self {
        Self {
            owner,
            token,
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Returns the owner (minter) identity.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the token metadata.
    pub fn token(&self) -> &TokenInfo {
        &self.token
    }

    /// Returns the balance of `holder`, zero if it was never credited.
    pub fn balance_of(&self, holder: &Address) -> Balance {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    /// Returns the total supply.
    pub fn total_supply(&self) -> Balance {
        self.total_supply
    }

    /// Iterates over every recorded holder and its balance.
    ///
    /// Holders whose balance fell back to zero are still listed.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, Balance)> + '_ {
        self.balances.iter().map(|(addr, bal)| (addr, *bal))
    }

    /// Recomputes the sum of all balances and compares it with the supply counter.
    pub fn supply_matches_balances(&self) -> bool {
        self.balances
            .values()
            .try_fold(0u128, |acc, bal| acc.checked_add(*bal))
            == Some(self.total_supply)
    }

    /// Mints `amount` new tokens to `to`.
    ///
    /// # Arguments
    ///
    /// * `caller` - The identity requesting the mint (must be the owner)
    /// * `to` - The recipient
    /// * `amount` - The amount to mint, may be zero
    ///
    /// # Returns
    ///
    /// The mint receipt, or `Err(LedgerError)` with the ledger unchanged
    pub fn mint(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: Balance,
    ) -> Result<LedgerEvent, LedgerError> {
        if *caller != self.owner {
            debug!("Rejected mint by non-owner {}", short_hex(caller));
            return Err(LedgerError::Unauthorized { caller: *caller });
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.balances.insert(*to, new_balance);
        self.total_supply = new_supply;
        debug_assert!(self.supply_matches_balances());

        debug!("Minted {} to {}, supply now {}", amount, short_hex(to), new_supply);
        Ok(LedgerEvent::minted(*to, amount))
    }

    /// Transfers `amount` tokens from `from` to `to`.
    ///
    /// A transfer to oneself is validated like any other and then leaves the
    /// balance unchanged.
    ///
    /// # Arguments
    ///
    /// * `from` - The sender (the caller of the operation)
    /// * `to` - The recipient
    /// * `amount` - The amount to transfer
    ///
    /// # Returns
    ///
    /// The transfer receipt, or `Err(LedgerError)` with the ledger unchanged
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Balance,
    ) -> Result<LedgerEvent, LedgerError> {
        let sender_bal = self.debitable(from, amount)?;

        if from != to {
            // Credit is computed before the debit is written so a failure
            // leaves both sides untouched.
            let recipient_bal = self
                .balance_of(to)
                .checked_add(amount)
                .ok_or(LedgerError::ArithmeticOverflow)?;

            self.balances.insert(*from, sender_bal - amount);
            self.balances.insert(*to, recipient_bal);
        }
        debug_assert!(self.supply_matches_balances());

        debug!(
            "Transferred {} from {} to {}",
            amount,
            short_hex(from),
            short_hex(to)
        );
        Ok(LedgerEvent::transferred(*from, *to, amount))
    }

    /// Burns `amount` tokens held by `from`.
    ///
    /// # Arguments
    ///
    /// * `from` - The holder burning their own tokens
    /// * `amount` - The amount to burn
    ///
    /// # Returns
    ///
    /// The burn receipt, or `Err(LedgerError)` with the ledger unchanged
    pub fn burn(&mut self, from: &Address, amount: Balance) -> Result<LedgerEvent, LedgerError> {
        let holder_bal = self.debitable(from, amount)?;

        // holder_bal <= total_supply, so neither subtraction can underflow.
        self.balances.insert(*from, holder_bal - amount);
        self.total_supply -= amount;
        debug_assert!(self.supply_matches_balances());

        debug!(
            "Burned {} from {}, supply now {}",
            amount,
            short_hex(from),
            self.total_supply
        );
        Ok(LedgerEvent::burned(*from, amount))
    }

    /// Applies a ledger message.
    pub fn apply(&mut self, msg: &LedgerMsg) -> Result<LedgerEvent, LedgerError> {
        match msg {
            LedgerMsg::Mint { caller, to, amount } => self.mint(caller, to, *amount),
            LedgerMsg::Transfer { from, to, amount } => self.transfer(from, to, *amount),
            LedgerMsg::Burn { from, amount } => self.burn(from, *amount),
        }
    }

    /// Returns the balance of `holder` if it covers `amount`.
    fn debitable(&self, holder: &Address, amount: Balance) -> Result<Balance, LedgerError> {
        let available = self.balance_of(holder);
        if available < amount {
            debug!(
                "Rejected debit of {} from {} holding {}",
                amount,
                short_hex(holder),
                available
            );
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        Ok(available)
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("owner", &short_hex(&self.owner))
            .field("token", &self.token.symbol)
            .field("holders", &self.balances.len())
            .field("total_supply", &self.total_supply)
            .finish()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ledger {{ token: {}, holders: {}, total_supply: {} }}",
            self.token.symbol,
            self.balances.len(),
            self.total_supply
        )
    }
}
