//! Exclusive owners of pool balances.
//!
//! [`ReserveLedger`] holds the two asset reserves; [`ShareLedger`] holds
//! per-holder share balances and the outstanding total.  All pool state
//! mutation is routed through these two types; the orchestration layer
//! in [`pool`](crate::pool) never touches a balance directly.

mod reserves;
mod shares;

pub use reserves::{ReserveLedger, Side};
pub use shares::ShareLedger;
