//! Pure constant-product pricing with fee deduction.
//!
//! The swap invariant is `x * y = k` where `x` and `y` are the reserves
//! of the two assets.  A fixed 0.3% fee is deducted from the input
//! amount before the pricing formula is applied:
//!
//! ```text
//! effective_in = amount_in * 997
//! amount_out   = effective_in * reserve_out / (reserve_in * 1000 + effective_in)
//! ```
//!
//! The final division truncates, so rounding never increases the
//! trader's output.  After every swap `k_after >= k_before` because the
//! fee component stays in the pool.
//!
//! Everything here is side-effect-free and callable against arbitrary
//! reserves for quoting purposes.

use crate::domain::{Amount, Price};
use crate::error::{PoolError, Result};
use crate::math::mul_div_floor;

/// Fee-adjusted input multiplier: the trader's input counts at 99.7%.
pub const FEE_NUMERATOR: u128 = 997;

/// Fee denominator; `FEE_NUMERATOR / FEE_DENOMINATOR` is the retained
/// fraction of the input.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Computes the swap output for `amount_in` against the given reserves.
///
/// The result may be zero for very small inputs against large reserves;
/// callers executing a swap treat that as
/// [`PoolError::InsufficientOutput`], while quoting callers may surface
/// the zero directly.
///
/// # Errors
///
/// - [`PoolError::InvalidAmounts`] unless all three arguments are
///   strictly positive (a zero reserve means the pool is empty).
/// - [`PoolError::Overflow`] if an intermediate product exceeds `u128`.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Amount;
/// use pairpool::pricing::amount_out;
///
/// // 10 in against reserves (100, 200): effective_in = 9970,
/// // out = floor(9970 * 200 / (100 * 1000 + 9970)) = 18
/// let out = amount_out(Amount::new(10), Amount::new(100), Amount::new(200))
///     .expect("valid quote");
/// assert_eq!(out, Amount::new(18));
/// ```
pub fn amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InvalidAmounts(
            "pricing requires positive input and reserves",
        ));
    }

    let effective_in = amount_in
        .get()
        .checked_mul(FEE_NUMERATOR)
        .ok_or(PoolError::Overflow("fee-adjusted input overflow"))?;

    let scaled_reserve_in = reserve_in
        .get()
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(PoolError::Overflow("scaled input reserve overflow"))?;

    let denominator = scaled_reserve_in
        .checked_add(effective_in)
        .ok_or(PoolError::Overflow("pricing denominator overflow"))?;

    let out = mul_div_floor(effective_in, reserve_out.get(), denominator)?;
    Ok(Amount::new(out))
}

/// Computes the spot price of asset A in units of asset B, scaled by
/// [`Price::SCALE`].
///
/// # Errors
///
/// - [`PoolError::EmptyPool`] if `reserve_a` is zero.
/// - [`PoolError::Overflow`] if the scaled numerator exceeds `u128`.
pub fn spot_price(reserve_a: Amount, reserve_b: Amount) -> Result<Price> {
    Price::from_reserves(reserve_b, reserve_a)
}
