//! Holder identity for share balances and transfers.

/// The identity of an account that can hold liquidity shares and
/// exchange assets with the pool.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  All 32-byte sequences are
/// valid account identities, so construction is infallible.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AccountId;
///
/// let holder = AccountId::from_bytes([7u8; 32]);
/// assert_eq!(holder.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}
