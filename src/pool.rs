//! The two-asset constant-product pool.
//!
//! [`Pool`] orchestrates the reserve and share ledgers: liquidity
//! deposits against minted shares, withdrawals against burned shares,
//! and one-directional swaps priced by [`pricing`](crate::pricing).
//! Asset movement and event delivery are delegated to the caller's
//! [`AssetVault`] and [`EventSink`] collaborators.
//!
//! # Transaction Discipline
//!
//! Every mutating operation validates all preconditions and computes
//! all results before touching either ledger, keeps external transfer
//! calls strictly outside the state-mutation block, and either fully
//! commits or fully rolls back.  A failed outbound transfer restores
//! the ledgers from a pre-mutation snapshot and reclaims any already
//! delivered leg, so the pool can never end up with shares burned but
//! no payout delivered, or reserves debited without the trader paid.
//!
//! # Serialization of Operations
//!
//! Mutating entry points take `&mut self`: within one process the
//! borrow checker serializes operations on a pool, and read-only
//! queries on `&self` always observe a fully committed state.  For
//! cross-thread sharing, wrap the pool in a `std::sync::Mutex` (or
//! route operations through a single-writer task); independent pools
//! are independent values and need no shared lock.

use crate::domain::{AccountId, Amount, AssetPair, Price, Shares, SwapDirection};
use crate::error::{PoolError, Result};
use crate::events::{EventSink, PoolEvent};
use crate::ledger::{ReserveLedger, ShareLedger, Side};
use crate::math::{isqrt, mul_div_floor};
use crate::pricing;
use crate::transfer::AssetVault;

/// A single trading pair exchanging two fungible assets against pooled
/// reserves under the constant-product rule with a fixed 0.3% fee.
///
/// The pool starts empty; the first deposit funds it and sets the
/// initial exchange rate.  There is no destruction operation.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AccountId, Amount, AssetId, AssetPair, SwapDirection};
/// use pairpool::events::NullSink;
/// use pairpool::pool::Pool;
/// use pairpool::transfer::InMemoryVault;
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// ).expect("distinct assets");
///
/// let provider = AccountId::from_bytes([7u8; 32]);
/// let mut vault = InMemoryVault::new();
/// vault.credit(pair.asset_a(), provider, Amount::new(1_000)).expect("credit");
/// vault.credit(pair.asset_b(), provider, Amount::new(2_000)).expect("credit");
///
/// let mut pool = Pool::new(pair);
/// let mut events = NullSink;
///
/// // First deposit mints floor(sqrt(100 * 200)) = 141 shares.
/// let minted = pool
///     .add_liquidity(Amount::new(100), Amount::new(200), provider, &mut vault, &mut events)
///     .expect("deposit");
/// assert_eq!(minted.get(), 141);
/// assert_eq!(pool.reserves(), (Amount::new(100), Amount::new(200)));
///
/// // Swap 10 A for 18 B.
/// let out = pool
///     .swap(SwapDirection::AToB, Amount::new(10), provider, &mut vault, &mut events)
///     .expect("swap");
/// assert_eq!(out, Amount::new(18));
/// assert_eq!(pool.reserves(), (Amount::new(110), Amount::new(182)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pair: AssetPair,
    reserves: ReserveLedger,
    shares: ShareLedger,
}

impl Pool {
    /// Creates an empty pool bound to `pair` for its lifetime.
    #[must_use]
    pub fn new(pair: AssetPair) -> Self {
        Self {
            pair,
            reserves: ReserveLedger::new(),
            shares: ShareLedger::new(),
        }
    }

    /// Returns the asset pair bound at construction.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns both reserves as `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        self.reserves.get()
    }

    /// Returns the total of all outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// Returns `holder`'s share balance, zero if none.
    #[must_use]
    pub fn shares_of(&self, holder: &AccountId) -> Shares {
        self.shares.balance_of(holder)
    }

    /// Returns `true` if the pool holds no reserves and no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserves.is_empty()
    }

    /// Returns the spot price of asset A in units of asset B, as a
    /// fixed-point value scaled by [`Price::SCALE`].
    ///
    /// Read-only; any number of calls between two mutations yield the
    /// same value.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::EmptyPool`] if `reserve_a` is zero.
    pub fn spot_price(&self) -> Result<Price> {
        let (reserve_a, reserve_b) = self.reserves.get();
        pricing::spot_price(reserve_a, reserve_b)
    }

    /// Quotes the output of a hypothetical swap against the current
    /// reserves, without executing anything.
    ///
    /// Unlike [`swap`](Self::swap), a quote of zero is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`PoolError::EmptyPool`] if either reserve is zero.
    /// - [`PoolError::InvalidAmounts`] if `amount_in` is zero.
    pub fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount> {
        let (side_in, side_out) = Self::sides(direction);
        let reserve_in = self.reserves.of(side_in);
        let reserve_out = self.reserves.of(side_out);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        pricing::amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Deposits `amount_a` and `amount_b` from `provider` and mints
    /// shares in return.
    ///
    /// The first deposit mints `floor(sqrt(amount_a * amount_b))` and
    /// establishes the exchange rate.  Later deposits mint
    /// `min(floor(amount_a * total / reserve_a), floor(amount_b * total
    /// / reserve_b))`: an off-ratio deposit is credited only for its
    /// lesser-valued side, and the excess stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmounts`] unless both amounts are positive.
    /// - [`PoolError::ZeroLiquidityMinted`] if the computed shares are
    ///   zero (tiny deposit against large reserves).
    /// - [`PoolError::TransferFailed`] if either inbound transfer fails;
    ///   an already-settled first leg is returned to the provider and
    ///   no ledger state changes.
    /// - [`PoolError::Overflow`] if a reserve or share total would
    ///   exceed `u128`.
    pub fn add_liquidity<V: AssetVault, E: EventSink>(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        provider: AccountId,
        vault: &mut V,
        events: &mut E,
    ) -> Result<Shares> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::InvalidAmounts("deposit requires both assets"));
        }
        let minted = self.shares_for_deposit(amount_a, amount_b)?;
        if minted.is_zero() {
            return Err(PoolError::ZeroLiquidityMinted);
        }

        vault.transfer_in(self.pair.asset_a(), provider, amount_a)?;
        if let Err(err) = vault.transfer_in(self.pair.asset_b(), provider, amount_b) {
            // return the settled first leg; the caller sees the original failure
            let _ = vault.transfer_out(self.pair.asset_a(), provider, amount_a);
            return Err(err);
        }

        let reserves_before = self.reserves;
        let applied = (|| -> Result<()> {
            self.reserves.increase(Side::A, amount_a)?;
            self.reserves.increase(Side::B, amount_b)?;
            self.shares.mint(provider, minted)?;
            Ok(())
        })();
        if let Err(err) = applied {
            self.reserves = reserves_before;
            let _ = vault.transfer_out(self.pair.asset_a(), provider, amount_a);
            let _ = vault.transfer_out(self.pair.asset_b(), provider, amount_b);
            return Err(err);
        }

        events.record(PoolEvent::LiquidityAdded {
            provider,
            amount_a,
            amount_b,
            shares_minted: minted,
        });
        Ok(minted)
    }

    /// Burns `share_amount` of `provider`'s shares and pays out the
    /// proportional slice of both reserves.
    ///
    /// Payouts are `floor(share_amount * reserve / total)` per asset;
    /// floor rounding means a withdrawal never returns more than the
    /// proportional claim.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `share_amount` is zero.
    /// - [`PoolError::Unauthorized`] if `provider` holds no shares.
    /// - [`PoolError::InsufficientShares`] if the balance is smaller
    ///   than `share_amount`.
    /// - [`PoolError::ZeroWithdrawal`] if either payout computes to
    ///   zero.
    /// - [`PoolError::TransferFailed`] if an outbound transfer fails;
    ///   the ledgers are restored and any delivered leg reclaimed.
    pub fn remove_liquidity<V: AssetVault, E: EventSink>(
        &mut self,
        share_amount: Shares,
        provider: AccountId,
        vault: &mut V,
        events: &mut E,
    ) -> Result<(Amount, Amount)> {
        if share_amount.is_zero() {
            return Err(PoolError::InvalidAmount(
                "withdrawal requires positive shares",
            ));
        }
        if !self.shares.contains(&provider) {
            return Err(PoolError::Unauthorized);
        }
        if self.shares.balance_of(&provider) < share_amount {
            return Err(PoolError::InsufficientShares);
        }

        let total = self.shares.total();
        let (reserve_a, reserve_b) = self.reserves.get();
        let amount_a = Amount::new(mul_div_floor(
            share_amount.get(),
            reserve_a.get(),
            total.get(),
        )?);
        let amount_b = Amount::new(mul_div_floor(
            share_amount.get(),
            reserve_b.get(),
            total.get(),
        )?);
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::ZeroWithdrawal);
        }

        // burn and reserve decrease commit before the payouts go out
        let reserves_before = self.reserves;
        let shares_before = self.shares.clone();
        let applied = (|| -> Result<()> {
            self.shares.burn(provider, share_amount)?;
            self.reserves.decrease(Side::A, amount_a)?;
            self.reserves.decrease(Side::B, amount_b)?;
            Ok(())
        })();
        if let Err(err) = applied {
            self.reserves = reserves_before;
            self.shares = shares_before;
            return Err(err);
        }

        if let Err(err) = vault.transfer_out(self.pair.asset_a(), provider, amount_a) {
            self.reserves = reserves_before;
            self.shares = shares_before;
            return Err(err);
        }
        if let Err(err) = vault.transfer_out(self.pair.asset_b(), provider, amount_b) {
            self.reserves = reserves_before;
            self.shares = shares_before;
            // reclaim the delivered first leg; the caller sees the original failure
            let _ = vault.transfer_in(self.pair.asset_a(), provider, amount_a);
            return Err(err);
        }

        events.record(PoolEvent::LiquidityRemoved {
            provider,
            amount_a,
            amount_b,
            shares_burned: share_amount,
        });
        Ok((amount_a, amount_b))
    }

    /// Exchanges `amount_in` of the direction's input asset for the
    /// output asset at the fee-adjusted constant-product price.
    ///
    /// The post-swap reserve product is never below the pre-swap
    /// product because the fee stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
    /// - [`PoolError::EmptyPool`] if either reserve is zero.
    /// - [`PoolError::InsufficientOutput`] if the priced output is zero.
    /// - [`PoolError::TransferFailed`] if a transfer fails; reserves
    ///   are restored and the inbound leg refunded.
    /// - [`PoolError::Overflow`] if pricing or a reserve update would
    ///   exceed `u128`.
    pub fn swap<V: AssetVault, E: EventSink>(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        trader: AccountId,
        vault: &mut V,
        events: &mut E,
    ) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("swap requires positive input"));
        }
        let (side_in, side_out) = Self::sides(direction);
        let reserve_in = self.reserves.of(side_in);
        let reserve_out = self.reserves.of(side_out);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        let amount_out = pricing::amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out.is_zero() {
            return Err(PoolError::InsufficientOutput);
        }
        let asset_in = direction.asset_in(&self.pair);
        let asset_out = direction.asset_out(&self.pair);

        vault.transfer_in(asset_in, trader, amount_in)?;

        let reserves_before = self.reserves;
        let applied = (|| -> Result<()> {
            self.reserves.increase(side_in, amount_in)?;
            self.reserves.decrease(side_out, amount_out)?;
            Ok(())
        })();
        if let Err(err) = applied {
            self.reserves = reserves_before;
            let _ = vault.transfer_out(asset_in, trader, amount_in);
            return Err(err);
        }

        if let Err(err) = vault.transfer_out(asset_out, trader, amount_out) {
            self.reserves = reserves_before;
            // refund the inbound leg; the caller sees the original failure
            let _ = vault.transfer_out(asset_in, trader, amount_in);
            return Err(err);
        }

        events.record(PoolEvent::Swap {
            trader,
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        });
        Ok(amount_out)
    }

    /// Sells asset A for asset B.  See [`swap`](Self::swap).
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn swap_a_for_b<V: AssetVault, E: EventSink>(
        &mut self,
        amount_in: Amount,
        trader: AccountId,
        vault: &mut V,
        events: &mut E,
    ) -> Result<Amount> {
        self.swap(SwapDirection::AToB, amount_in, trader, vault, events)
    }

    /// Sells asset B for asset A.  See [`swap`](Self::swap).
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn swap_b_for_a<V: AssetVault, E: EventSink>(
        &mut self,
        amount_in: Amount,
        trader: AccountId,
        vault: &mut V,
        events: &mut E,
    ) -> Result<Amount> {
        self.swap(SwapDirection::BToA, amount_in, trader, vault, events)
    }

    const fn sides(direction: SwapDirection) -> (Side, Side) {
        match direction {
            SwapDirection::AToB => (Side::A, Side::B),
            SwapDirection::BToA => (Side::B, Side::A),
        }
    }

    /// Shares minted for a deposit against the current state.
    ///
    /// First deposit: `floor(sqrt(amount_a * amount_b))`.  Later
    /// deposits: the smaller of the two proportional estimates.
    fn shares_for_deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares> {
        let total = self.shares.total();
        if total.is_zero() {
            let product = amount_a
                .checked_mul(&amount_b)
                .ok_or(PoolError::Overflow("initial deposit product overflow"))?;
            return Ok(Shares::new(isqrt(product.get())));
        }
        let (reserve_a, reserve_b) = self.reserves.get();
        let by_a = mul_div_floor(amount_a.get(), total.get(), reserve_a.get())?;
        let by_b = mul_div_floor(amount_b.get(), total.get(), reserve_b.get())?;
        Ok(Shares::new(by_a.min(by_b)))
    }
}
