//! Chain-agnostic asset identity.

/// A generic, chain-agnostic identity for a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  Construction is
/// infallible; the all-zero value is the *null* identity and is rejected
/// wherever a real asset is required (see
/// [`AssetPair`](super::AssetPair)).
///
/// # Examples
///
/// ```
/// use pairpool::domain::AssetId;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(asset.as_bytes(), [1u8; 32]);
/// assert!(!asset.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero null identity.
    ///
    /// The null identity is not a valid pool asset; it exists as a
    /// sentinel for collaborators that need one.
    #[must_use]
    pub const fn null() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the all-zero null identity.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AssetId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn null_is_all_zeros() {
        assert_eq!(AssetId::null().as_bytes(), [0u8; 32]);
        assert!(AssetId::null().is_null());
    }

    #[test]
    fn non_null() {
        assert!(!AssetId::from_bytes([1u8; 32]).is_null());
    }

    #[test]
    fn equality() {
        assert_eq!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([1u8; 32]));
        assert_ne!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
    }

    #[test]
    fn ordering_by_bytes() {
        assert!(AssetId::from_bytes([1u8; 32]) < AssetId::from_bytes([2u8; 32]));
    }
}
