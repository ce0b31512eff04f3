//! # Pairpool
//!
//! Two-asset constant-product AMM pool engine: deposit two fungible
//! assets as liquidity, receive a proportional share claim, and exchange
//! one asset for the other against the pooled reserves.  Price is
//! derived algebraically from the reserve ratio; there is no order book
//! and no counterparty matching.
//!
//! The crate is the pool-accounting and pricing engine only.  Moving
//! real assets and delivering events are collaborator concerns expressed
//! as traits ([`AssetVault`](transfer::AssetVault),
//! [`EventSink`](events::EventSink)); the engine guarantees that every
//! operation either fully commits or fully rolls back around those
//! collaborator calls.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pairpool = "0.1"
//! ```
//!
//! ## Fund a pool and trade against it
//!
//! ```rust
//! use pairpool::domain::{AccountId, Amount, AssetId, AssetPair, SwapDirection};
//! use pairpool::events::RecordingSink;
//! use pairpool::pool::Pool;
//! use pairpool::transfer::InMemoryVault;
//!
//! // 1. Two distinct assets, bound to the pool for its lifetime.
//! let pair = AssetPair::new(
//!     AssetId::from_bytes([1u8; 32]),
//!     AssetId::from_bytes([2u8; 32]),
//! ).expect("distinct assets");
//!
//! // 2. An asset collaborator holding the participants' balances.
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let mut vault = InMemoryVault::new();
//! vault.credit(pair.asset_a(), alice, Amount::new(10_000)).expect("credit");
//! vault.credit(pair.asset_b(), alice, Amount::new(10_000)).expect("credit");
//!
//! // 3. Fund the pool; the first deposit sets the exchange rate.
//! let mut pool = Pool::new(pair);
//! let mut events = RecordingSink::new();
//! let minted = pool
//!     .add_liquidity(Amount::new(1_000), Amount::new(4_000), alice, &mut vault, &mut events)
//!     .expect("deposit");
//! assert_eq!(minted.get(), 2_000); // floor(sqrt(1_000 * 4_000))
//!
//! // 4. Trade: 0.3% fee deducted from the input before pricing.
//! let out = pool
//!     .swap(SwapDirection::AToB, Amount::new(100), alice, &mut vault, &mut events)
//!     .expect("swap");
//! assert!(out.get() > 0);
//! assert_eq!(events.events().len(), 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  owns the Pool plus vault and sink collaborators
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap / queries
//!        ▼
//! ┌──────────────┐     transfers      ┌──────────────┐
//! │     Pool      │ ─────────────────▶ │  AssetVault   │
//! │ (orchestrator)│ ◀───────────────── │ (collaborator)│
//! └──────┬───────┘     events ───────▶ EventSink
//!        │ exclusive mutation
//!        ▼
//! ┌──────────────┐   ┌──────────────┐
//! │ ReserveLedger │   │  ShareLedger  │
//! └──────────────┘   └──────────────┘
//!        ▲
//!        │ pure quotes
//! ┌──────────────┐
//! │   pricing     │  amount_out, spot_price (no state)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`Price`](domain::Price), etc. |
//! | [`ledger`] | Exclusive owners of pool balances: [`ReserveLedger`](ledger::ReserveLedger), [`ShareLedger`](ledger::ShareLedger) |
//! | [`pricing`] | Pure constant-product pricing with the fixed 0.3% fee |
//! | [`pool`] | [`Pool`](pool::Pool): liquidity management, swap execution, queries |
//! | [`transfer`] | [`AssetVault`](transfer::AssetVault) collaborator trait and the in-memory reference vault |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) and the [`EventSink`](events::EventSink) notifier trait |
//! | [`math`] | Checked `u128` helpers: `mul_div_floor`, `isqrt` |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod pricing;
pub mod transfer;

#[cfg(test)]
mod proptest_properties;
