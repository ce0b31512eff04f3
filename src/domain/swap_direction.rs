//! Direction of a one-way trade through the pool.

use core::fmt;

use super::{AssetId, AssetPair};

/// Which way a swap moves value through the pool.
///
/// The two directions are symmetric; the direction selects which reserve
/// receives the input and which pays the output.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair, SwapDirection};
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// ).expect("distinct assets");
///
/// let dir = SwapDirection::AToB;
/// assert_eq!(dir.asset_in(&pair), pair.asset_a());
/// assert_eq!(dir.asset_out(&pair), pair.asset_b());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Returns the asset the trader pays in.
    #[must_use]
    pub const fn asset_in(&self, pair: &AssetPair) -> AssetId {
        match self {
            Self::AToB => pair.asset_a(),
            Self::BToA => pair.asset_b(),
        }
    }

    /// Returns the asset the trader receives.
    #[must_use]
    pub const fn asset_out(&self, pair: &AssetPair) -> AssetId {
        match self {
            Self::AToB => pair.asset_b(),
            Self::BToA => pair.asset_a(),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}
