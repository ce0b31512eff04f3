//! The two assets bound to a pool.

use super::AssetId;
use crate::error::{PoolError, Result};

/// The pair of distinct assets traded by a pool, bound once for the
/// pool's lifetime.
///
/// Side A and side B are positional: `asset_a` backs `reserve_a` and
/// `asset_b` backs `reserve_b`.  The pair rejects equal identities and
/// the null identity at construction, so a validly constructed pair
/// always names two real, distinct assets.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
///
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let eur = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(usd, eur).expect("distinct assets");
///
/// assert_eq!(pair.asset_a(), usd);
/// assert_eq!(pair.asset_b(), eur);
/// assert!(pair.contains(&usd));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the two identities are
    /// equal, or if either is the null identity.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self> {
        if asset_a.is_null() || asset_b.is_null() {
            return Err(PoolError::InvalidAsset(
                "pair cannot contain the null asset",
            ));
        }
        if asset_a == asset_b {
            return Err(PoolError::InvalidAsset(
                "pair requires two distinct assets",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the side-A asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the side-B asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn valid_pair() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.asset_a(), asset(1));
        assert_eq!(pair.asset_b(), asset(2));
    }

    #[test]
    fn preserves_caller_order() {
        let Ok(pair) = AssetPair::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.asset_a(), asset(2));
        assert_eq!(pair.asset_b(), asset(1));
    }

    #[test]
    fn rejects_equal_assets() {
        let Err(e) = AssetPair::new(asset(1), asset(1)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            PoolError::InvalidAsset("pair requires two distinct assets")
        );
    }

    #[test]
    fn rejects_null_first() {
        let result = AssetPair::new(AssetId::null(), asset(1));
        assert!(matches!(result, Err(PoolError::InvalidAsset(_))));
    }

    #[test]
    fn rejects_null_second() {
        let result = AssetPair::new(asset(1), AssetId::null());
        assert!(matches!(result, Err(PoolError::InvalidAsset(_))));
    }

    #[test]
    fn contains_both_members() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&asset(1)));
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
    }

    #[test]
    fn copy_semantics() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        let copy = pair;
        assert_eq!(pair, copy);
    }
}
