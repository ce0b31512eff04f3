//! Fixed-point spot price.

use core::fmt;

use super::Amount;
use crate::error::{PoolError, Result};

/// A spot price as an integer fixed-point value scaled by
/// [`Price::SCALE`] (`10^18`).
///
/// A price of exactly `1.0` is represented as `10^18`.  All price
/// arithmetic truncates towards zero; no floating point is involved, so
/// results are bit-exact across platforms.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, Price};
///
/// // 200 quote units per 100 base units: price 2.0
/// let price = Price::from_reserves(Amount::new(200), Amount::new(100))
///     .expect("funded reserves");
/// assert_eq!(price.get(), 2 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale: `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// The price `1.0`, scaled.
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `Price` from an already-scaled raw value.
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Computes `floor(quote * SCALE / base)`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::EmptyPool`] if `base` is zero.
    /// - [`PoolError::Overflow`] if `quote * SCALE` exceeds `u128`.
    pub fn from_reserves(quote: Amount, base: Amount) -> Result<Self> {
        if base.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        let scaled = quote
            .get()
            .checked_mul(Self::SCALE)
            .ok_or(PoolError::Overflow("price scaling overflow"))?;
        Ok(Self(scaled / base.get()))
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:018}")
    }
}
