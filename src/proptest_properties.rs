//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the engine-wide properties:
//!
//! 1. **First-deposit rule**: an empty pool mints `floor(sqrt(a * b))`.
//! 2. **Proportional-mint rule**: later deposits mint the smaller
//!    proportional estimate.
//! 3. **Round-trip conservation**: add then remove never pays out more
//!    than was deposited, and the share total is restored exactly.
//! 4. **Invariant preservation**: the reserve product never decreases
//!    across swaps.
//! 5. **Query idempotence**: quoting does not perturb state.

use proptest::prelude::*;

use crate::domain::{AccountId, Amount, AssetId, AssetPair, Shares, SwapDirection};
use crate::events::NullSink;
use crate::math::{isqrt, mul_div_floor};
use crate::pool::Pool;
use crate::transfer::InMemoryVault;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn make_pair() -> AssetPair {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("valid pair");
    };
    pair
}

fn lp() -> AccountId {
    AccountId::from_bytes([7u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

/// Vault with enough balance for any generated operation.
fn rich_vault() -> InMemoryVault {
    let mut vault = InMemoryVault::new();
    for account in [lp(), trader()] {
        for asset in [asset_a(), asset_b()] {
            let Ok(()) = vault.credit(asset, account, Amount::new(1 << 110)) else {
                panic!("credit");
            };
        }
    }
    vault
}

/// Pool funded with reserves `(ra, rb)` by the `lp()` account.
fn funded_pool(ra: u128, rb: u128) -> (Pool, InMemoryVault) {
    let mut pool = Pool::new(make_pair());
    let mut vault = rich_vault();
    let Ok(_) = pool.add_liquidity(
        Amount::new(ra),
        Amount::new(rb),
        lp(),
        &mut vault,
        &mut NullSink,
    ) else {
        panic!("funding deposit");
    };
    (pool, vault)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 10^12] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000u128
}

/// Trade and deposit amounts in range [1, 10^9].
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000u128
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    // -- 1. First-deposit rule ----------------------------------------------

    #[test]
    fn first_deposit_mints_geometric_mean(a in amount_strategy(), b in amount_strategy()) {
        let mut pool = Pool::new(make_pair());
        let mut vault = rich_vault();

        let Ok(minted) = pool.add_liquidity(
            Amount::new(a),
            Amount::new(b),
            lp(),
            &mut vault,
            &mut NullSink,
        ) else {
            panic!("first deposit");
        };

        prop_assert_eq!(minted.get(), isqrt(a * b));
        prop_assert_eq!(pool.reserves(), (Amount::new(a), Amount::new(b)));
        prop_assert_eq!(pool.total_shares().get(), isqrt(a * b));
    }

    // -- 2. Proportional-mint rule ------------------------------------------

    #[test]
    fn subsequent_deposit_mints_min_estimate(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let (mut pool, mut vault) = funded_pool(ra, rb);
        let total = pool.total_shares().get();

        let Ok(by_a) = mul_div_floor(a, total, ra) else {
            panic!("model by_a");
        };
        let Ok(by_b) = mul_div_floor(b, total, rb) else {
            panic!("model by_b");
        };
        let expected = by_a.min(by_b);

        let result = pool.add_liquidity(
            Amount::new(a),
            Amount::new(b),
            trader(),
            &mut vault,
            &mut NullSink,
        );
        if expected == 0 {
            prop_assert_eq!(result, Err(crate::error::PoolError::ZeroLiquidityMinted));
        } else {
            prop_assert_eq!(result, Ok(Shares::new(expected)));
            prop_assert_eq!(pool.total_shares().get(), total + expected);
        }
    }

    // -- 3. Round-trip conservation -----------------------------------------

    #[test]
    fn round_trip_on_empty_pool_is_exact(a in amount_strategy(), b in amount_strategy()) {
        let mut pool = Pool::new(make_pair());
        let mut vault = rich_vault();
        let a_before = vault.balance_of(asset_a(), &lp());
        let b_before = vault.balance_of(asset_b(), &lp());

        let Ok(minted) = pool.add_liquidity(
            Amount::new(a),
            Amount::new(b),
            lp(),
            &mut vault,
            &mut NullSink,
        ) else {
            panic!("deposit");
        };
        let Ok((out_a, out_b)) = pool.remove_liquidity(minted, lp(), &mut vault, &mut NullSink)
        else {
            panic!("withdrawal");
        };

        // sole holder removing all shares drains the pool exactly
        prop_assert_eq!((out_a, out_b), (Amount::new(a), Amount::new(b)));
        prop_assert!(pool.is_empty());
        prop_assert_eq!(pool.total_shares(), Shares::ZERO);
        prop_assert_eq!(vault.balance_of(asset_a(), &lp()), a_before);
        prop_assert_eq!(vault.balance_of(asset_b(), &lp()), b_before);
    }

    #[test]
    fn round_trip_on_funded_pool_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let (mut pool, mut vault) = funded_pool(ra, rb);
        let total_before = pool.total_shares();

        let Ok(minted) = pool.add_liquidity(
            Amount::new(a),
            Amount::new(b),
            trader(),
            &mut vault,
            &mut NullSink,
        ) else {
            // dust deposit; nothing to round-trip
            return Ok(());
        };
        let withdrawal = pool.remove_liquidity(minted, trader(), &mut vault, &mut NullSink);
        let Ok((out_a, out_b)) = withdrawal else {
            // a zero payout on either side aborts the withdrawal; the
            // deposit stands and the pool kept the full amounts
            prop_assert_eq!(withdrawal, Err(crate::error::PoolError::ZeroWithdrawal));
            return Ok(());
        };

        // floor rounding can only favor the pool
        prop_assert!(out_a.get() <= a);
        prop_assert!(out_b.get() <= b);
        prop_assert_eq!(pool.total_shares(), total_before);
        let (reserve_a, reserve_b) = pool.reserves();
        prop_assert!(reserve_a.get() >= ra);
        prop_assert!(reserve_b.get() >= rb);
    }

    // -- 4. Invariant preservation ------------------------------------------

    #[test]
    fn swap_never_decreases_reserve_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let (mut pool, mut vault) = funded_pool(ra, rb);
        let k_before = ra * rb;
        let direction = if a_to_b {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        };

        let result = pool.swap(direction, Amount::new(amount_in), trader(), &mut vault, &mut NullSink);
        let (reserve_a, reserve_b) = pool.reserves();
        let k_after = reserve_a.get() * reserve_b.get();

        match result {
            Ok(out) => {
                prop_assert!(!out.is_zero());
                prop_assert!(k_after >= k_before);
            }
            // a dust input that prices to zero must leave state untouched
            Err(crate::error::PoolError::InsufficientOutput) => {
                prop_assert_eq!(k_after, k_before);
            }
            Err(other) => panic!("unexpected swap failure: {other}"),
        }
    }

    #[test]
    fn swap_output_stays_below_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let (mut pool, mut vault) = funded_pool(ra, rb);
        let result = pool.swap(
            SwapDirection::AToB,
            Amount::new(amount_in),
            trader(),
            &mut vault,
            &mut NullSink,
        );
        if let Ok(out) = result {
            prop_assert!(out.get() < rb);
            let (_, reserve_b) = pool.reserves();
            prop_assert!(!reserve_b.is_zero());
        }
    }

    // -- 5. Query idempotence -----------------------------------------------

    #[test]
    fn queries_do_not_perturb_state(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let (pool, _) = funded_pool(ra, rb);

        let first_quote = pool.quote(SwapDirection::AToB, Amount::new(amount_in));
        let second_quote = pool.quote(SwapDirection::AToB, Amount::new(amount_in));
        prop_assert_eq!(first_quote, second_quote);

        prop_assert_eq!(pool.reserves(), (Amount::new(ra), Amount::new(rb)));
        prop_assert_eq!(pool.spot_price(), pool.spot_price());
    }
}
