//! Reserve bookkeeping for the two pooled assets.

use crate::domain::Amount;
use crate::error::{PoolError, Result};

/// Addresses one of the two reserve columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The asset-A reserve.
    A,
    /// The asset-B reserve.
    B,
}

/// Exclusive owner of the pool's two asset reserves.
///
/// No operation may leave a reserve negative: [`decrease`](Self::decrease)
/// fails with [`PoolError::InsufficientReserve`] rather than underflow,
/// and [`increase`](Self::increase) fails with [`PoolError::Overflow`]
/// rather than wrap.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Amount;
/// use pairpool::ledger::{ReserveLedger, Side};
///
/// let mut reserves = ReserveLedger::new();
/// reserves.increase(Side::A, Amount::new(100)).expect("no overflow");
/// reserves.increase(Side::B, Amount::new(200)).expect("no overflow");
/// assert_eq!(reserves.get(), (Amount::new(100), Amount::new(200)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReserveLedger {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ReserveLedger {
    /// Creates an empty ledger with both reserves at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
        }
    }

    /// Returns both reserves as `(reserve_a, reserve_b)`.
    ///
    /// Side-effect-free; any number of calls between two mutations
    /// observe the same values.
    #[must_use]
    pub const fn get(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns the reserve on one side.
    #[must_use]
    pub const fn of(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Returns the constant product `reserve_a * reserve_b`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the product exceeds `u128`.
    pub fn product(&self) -> Result<u128> {
        self.reserve_a
            .get()
            .checked_mul(self.reserve_b.get())
            .ok_or(PoolError::Overflow("reserve product overflow"))
    }

    /// Adds `amount` to the reserve on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the reserve would exceed
    /// `u128`; the ledger is unchanged on failure.
    pub fn increase(&mut self, side: Side, amount: Amount) -> Result<()> {
        let target = match side {
            Side::A => &mut self.reserve_a,
            Side::B => &mut self.reserve_b,
        };
        *target = target
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("reserve addition overflow"))?;
        Ok(())
    }

    /// Subtracts `amount` from the reserve on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientReserve`] if `amount` exceeds
    /// the current reserve; the ledger is unchanged on failure.
    pub fn decrease(&mut self, side: Side, amount: Amount) -> Result<()> {
        let target = match side {
            Side::A => &mut self.reserve_a,
            Side::B => &mut self.reserve_b,
        };
        *target = target
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientReserve)?;
        Ok(())
    }
}
