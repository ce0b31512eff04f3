//! State-transition events and the notifier collaborator.
//!
//! The pool reports every committed state transition to an [`EventSink`]
//! supplied by the caller.  Emission is infallible and happens only
//! after an operation has fully committed; a rolled-back operation emits
//! nothing.

use crate::domain::{AccountId, Amount, AssetId, Shares};

/// A committed pool state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Liquidity was deposited and shares minted.
    LiquidityAdded {
        /// The depositing account.
        provider: AccountId,
        /// Asset-A amount moved into the pool.
        amount_a: Amount,
        /// Asset-B amount moved into the pool.
        amount_b: Amount,
        /// Shares credited to the provider.
        shares_minted: Shares,
    },
    /// Shares were burned and reserves paid out.
    LiquidityRemoved {
        /// The withdrawing account.
        provider: AccountId,
        /// Asset-A amount paid out.
        amount_a: Amount,
        /// Asset-B amount paid out.
        amount_b: Amount,
        /// Shares debited from the provider.
        shares_burned: Shares,
    },
    /// One asset was exchanged for the other.
    Swap {
        /// The trading account.
        trader: AccountId,
        /// Asset sold to the pool.
        asset_in: AssetId,
        /// Asset bought from the pool.
        asset_out: AssetId,
        /// Input amount received by the pool.
        amount_in: Amount,
        /// Output amount paid to the trader.
        amount_out: Amount,
    },
}

/// Observer notified of committed state transitions.
///
/// Implementations must not fail: observability is not allowed to abort
/// or roll back a pool operation.
pub trait EventSink {
    /// Records one committed event.
    fn record(&mut self, event: PoolEvent);
}

/// An [`EventSink`] that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: PoolEvent) {}
}

/// An [`EventSink`] that keeps every event in order, for assertions in
/// tests and for callers that forward events elsewhere.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<PoolEvent>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn record(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> PoolEvent {
        PoolEvent::LiquidityAdded {
            provider: AccountId::from_bytes([1u8; 32]),
            amount_a: Amount::new(100),
            amount_b: Amount::new(200),
            shares_minted: Shares::new(141),
        }
    }

    #[test]
    fn null_sink_discards() {
        let mut sink = NullSink;
        sink.record(sample_event());
        // nothing to observe; the call simply must not panic
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.record(sample_event());
        sink.record(PoolEvent::Swap {
            trader: AccountId::from_bytes([2u8; 32]),
            asset_in: AssetId::from_bytes([1u8; 32]),
            asset_out: AssetId::from_bytes([2u8; 32]),
            amount_in: Amount::new(10),
            amount_out: Amount::new(18),
        });
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0], sample_event());
    }

    #[test]
    fn drain_empties_the_sink() {
        let mut sink = RecordingSink::new();
        sink.record(sample_event());
        let drained = sink.drain();
        assert_eq!(drained.len(), 1);
        assert!(sink.events().is_empty());
    }
}
