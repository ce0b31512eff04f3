//! Per-holder share bookkeeping.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::{PoolError, Result};

/// Exclusive owner of per-holder share balances and the outstanding
/// total.
///
/// `mint` and `burn` update the holder entry and the total atomically:
/// every failure condition is checked before either value changes, so no
/// observer can see one updated without the other.  The sum of all
/// balances always equals [`total`](Self::total).
///
/// Balances that reach zero are pruned from the map; a pruned holder is
/// indistinguishable from one that never held shares.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AccountId, Shares};
/// use pairpool::ledger::ShareLedger;
///
/// let holder = AccountId::from_bytes([7u8; 32]);
/// let mut ledger = ShareLedger::new();
/// ledger.mint(holder, Shares::new(100)).expect("mint");
/// assert_eq!(ledger.balance_of(&holder), Shares::new(100));
/// assert_eq!(ledger.total(), Shares::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareLedger {
    balances: BTreeMap<AccountId, Shares>,
    total: Shares,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total of all outstanding shares.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Returns `holder`'s balance, zero if absent.
    #[must_use]
    pub fn balance_of(&self, holder: &AccountId) -> Shares {
        self.balances.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns `true` if `holder` has a positive balance.
    #[must_use]
    pub fn contains(&self, holder: &AccountId) -> bool {
        self.balances.contains_key(holder)
    }

    /// Returns the number of holders with a positive balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Credits `amount` shares to `holder` and grows the total.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::Overflow`] if the total or the holder balance
    ///   would exceed `u128`.
    ///
    /// The ledger is unchanged on any failure.
    pub fn mint(&mut self, holder: AccountId, amount: Shares) -> Result<()> {
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount("cannot mint zero shares"));
        }
        let new_total = self
            .total
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("share total overflow"))?;
        let new_balance = self
            .balance_of(&holder)
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("holder balance overflow"))?;

        self.balances.insert(holder, new_balance);
        self.total = new_total;
        Ok(())
    }

    /// Debits `amount` shares from `holder` and shrinks the total.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::Unauthorized`] if `holder` has no balance at all.
    /// - [`PoolError::InsufficientShares`] if `holder`'s balance is
    ///   smaller than `amount`.
    ///
    /// The ledger is unchanged on any failure.
    pub fn burn(&mut self, holder: AccountId, amount: Shares) -> Result<()> {
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount("cannot burn zero shares"));
        }
        let balance = match self.balances.get(&holder) {
            None => return Err(PoolError::Unauthorized),
            Some(balance) => *balance,
        };
        let new_balance = balance
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientShares)?;
        let new_total = self
            .total
            .checked_sub(&amount)
            .ok_or(PoolError::Underflow("share total underflow"))?;

        if new_balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, new_balance);
        }
        self.total = new_total;
        Ok(())
    }
}
