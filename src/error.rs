//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers.
//!
//! # Propagation Policy
//!
//! Every precondition violation is detected before any state mutation and
//! aborts the entire operation with no partial effect.  A
//! [`PoolError::TransferFailed`] reported by the asset collaborator rolls
//! back any ledger mutation already applied within the operation.  No
//! error is retried automatically; retry is the caller's responsibility
//! after correcting the condition.

use core::fmt;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum for all pool operations.
///
/// Variants carrying a `&'static str` include a short context message
/// identifying which precondition or arithmetic step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolError {
    /// A single quantity was zero where a positive value is required.
    InvalidAmount(&'static str),
    /// A combination precondition failed, such as pricing against a
    /// zero reserve or a deposit with a zero leg.
    InvalidAmounts(&'static str),
    /// An asset identity was rejected (null identity, or both pair
    /// members equal).
    InvalidAsset(&'static str),
    /// A reserve decrease exceeded the current reserve balance.
    InsufficientReserve,
    /// A share burn exceeded the holder's balance.
    InsufficientShares,
    /// A deposit was too small to mint any shares after floor division.
    ZeroLiquidityMinted,
    /// A withdrawal computed to zero for at least one asset.
    ZeroWithdrawal,
    /// A swap priced to zero output.
    InsufficientOutput,
    /// The operation requires a funded pool but a reserve is zero.
    EmptyPool,
    /// The external asset collaborator reported a failed transfer.
    TransferFailed(&'static str),
    /// The actor holds no shares to burn or withdraw against.
    Unauthorized,
    /// Arithmetic exceeded the representable range.
    Overflow(&'static str),
    /// Arithmetic would have produced a negative quantity.
    Underflow(&'static str),
    /// Division by zero.
    DivisionByZero,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(msg) => write!(f, "invalid amount: {msg}"),
            Self::InvalidAmounts(msg) => write!(f, "invalid amounts: {msg}"),
            Self::InvalidAsset(msg) => write!(f, "invalid asset: {msg}"),
            Self::InsufficientReserve => write!(f, "insufficient reserve"),
            Self::InsufficientShares => write!(f, "insufficient shares"),
            Self::ZeroLiquidityMinted => write!(f, "deposit too small to mint liquidity"),
            Self::ZeroWithdrawal => write!(f, "withdrawal computes to zero"),
            Self::InsufficientOutput => write!(f, "swap output is zero"),
            Self::EmptyPool => write!(f, "pool has no reserves"),
            Self::TransferFailed(msg) => write!(f, "asset transfer failed: {msg}"),
            Self::Unauthorized => write!(f, "actor holds no shares"),
            Self::Overflow(msg) => write!(f, "arithmetic overflow: {msg}"),
            Self::Underflow(msg) => write!(f, "arithmetic underflow: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl core::error::Error for PoolError {}
