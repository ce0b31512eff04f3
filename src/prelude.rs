//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{AccountId, Amount, AssetId, AssetPair, Price, Shares, SwapDirection};

// Re-export error types
pub use crate::error::{PoolError, Result};

// Re-export the pool and its collaborator traits
pub use crate::events::{EventSink, PoolEvent};
pub use crate::pool::Pool;
pub use crate::transfer::AssetVault;
