//! Error types for degree distribution construction
//!
//! Only bad input is reported through these errors. A sampled index that
//! falls outside the support is a broken invariant and panics instead.

use thiserror::Error;

/// Rejected construction parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolitonError {
    /// `k` was zero, so the support `{1, ..., k}` is empty
    #[error("k must be at least 1")]
    EmptySupport,

    /// `k` does not fit in a table on this platform
    #[error("k = {k} is too large to build a table for")]
    SupportTooLarge { k: u64 },

    /// The robust free parameter was zero, negative, NaN or infinite
    #[error("c must be a positive finite number, got {c}")]
    InvalidC { c: f64 },

    /// The failure bound was outside the open interval (0, 1)
    #[error("delta must be in (0, 1), got {delta}")]
    InvalidDelta { delta: f64 },

    /// The ripple is so large that `round(k / R)` is zero
    #[error("ripple R = {ripple} is too large for k = {k}: spike index rounds to 0")]
    DegenerateSpike { k: u64, ripple: f64 },
}
