//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the core value types that model the pool domain:
//! assets, accounts, amounts, shares, prices, and swap directions.
//! All types use newtypes with validated constructors to enforce
//! invariants.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod price;
mod shares;
mod swap_direction;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use price::Price;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
