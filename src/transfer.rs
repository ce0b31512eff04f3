//! Asset movement collaborator.
//!
//! The engine never holds asset balances itself; it requires a
//! capability to move a specified amount of an asset between a holder
//! and pool custody.  The contract is all-or-nothing: a call either
//! moves the full amount or reports [`PoolError::TransferFailed`] having
//! moved nothing.  A partial transfer is not a representable outcome,
//! and the engine does not re-validate collaborator balances; honesty of
//! the collaborator is a documented precondition.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{PoolError, Result};

/// Capability to move assets between holders and pool custody.
///
/// Both methods are atomic by contract: on `Err` nothing has moved.
pub trait AssetVault {
    /// Moves `amount` of `asset` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`] if the transfer cannot be
    /// completed in full.
    fn transfer_in(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<()>;

    /// Moves `amount` of `asset` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`] if the transfer cannot be
    /// completed in full.
    fn transfer_out(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<()>;
}

/// In-memory [`AssetVault`] backed by per-holder balances and a custody
/// column per asset.
///
/// This is the reference collaborator used by the crate's tests and
/// documentation examples; production deployments substitute their own
/// asset layer.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AccountId, Amount, AssetId};
/// use pairpool::transfer::{AssetVault, InMemoryVault};
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([7u8; 32]);
///
/// let mut vault = InMemoryVault::new();
/// vault.credit(asset, alice, Amount::new(500)).expect("credit");
/// vault.transfer_in(asset, alice, Amount::new(200)).expect("transfer");
///
/// assert_eq!(vault.balance_of(asset, &alice), Amount::new(300));
/// assert_eq!(vault.custody_of(asset), Amount::new(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryVault {
    balances: BTreeMap<(AssetId, AccountId), Amount>,
    custody: BTreeMap<AssetId, Amount>,
}

impl InMemoryVault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account`, outside any pool
    /// operation.  Used to fund accounts in tests and examples.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the balance would exceed
    /// `u128`.
    pub fn credit(&mut self, asset: AssetId, account: AccountId, amount: Amount) -> Result<()> {
        let entry = self
            .balances
            .entry((asset, account))
            .or_insert(Amount::ZERO);
        *entry = entry
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("vault balance overflow"))?;
        Ok(())
    }

    /// Returns `account`'s balance of `asset`, zero if absent.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, account: &AccountId) -> Amount {
        self.balances
            .get(&(asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Returns the pool custody balance of `asset`, zero if absent.
    #[must_use]
    pub fn custody_of(&self, asset: AssetId) -> Amount {
        self.custody.get(&asset).copied().unwrap_or(Amount::ZERO)
    }
}

impl AssetVault for InMemoryVault {
    fn transfer_in(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balance_of(asset, &from);
        let new_balance = balance
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("holder balance too low"))?;
        let custody = self.custody_of(asset);
        let new_custody = custody
            .checked_add(&amount)
            .ok_or(PoolError::TransferFailed("custody overflow"))?;

        self.balances.insert((asset, from), new_balance);
        self.custody.insert(asset, new_custody);
        Ok(())
    }

    fn transfer_out(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<()> {
        let custody = self.custody_of(asset);
        let new_custody = custody
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("pool custody too low"))?;
        let balance = self.balance_of(asset, &to);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(PoolError::TransferFailed("holder balance overflow"))?;

        self.custody.insert(asset, new_custody);
        self.balances.insert((asset, to), new_balance);
        Ok(())
    }
}
