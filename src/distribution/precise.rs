//! Extended-precision accumulation
//!
//! [`ExtendedSum`] keeps a running total as the unevaluated sum `hi + lo` of
//! two `f64`s (a "double-double"), which carries roughly 106 bits of
//! significand. Additions go through the error-free TwoSum transformation, so
//! the rounding error of every step is kept in `lo` rather than dropped.
//!
//! The robust table builder sums `k` terms spanning many orders of magnitude
//! and then divides every prefix by the total. Doing both in double-double
//! and rounding once per ratio keeps each split point within an ulp or so of
//! the exact value.

use std::ops::AddAssign;

/// Running sum held in double-double precision
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtendedSum {
    hi: f64,
    lo: f64,
}

/// `a + b = s + err` exactly, for any ordering of magnitudes
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Like [`two_sum`] but requires `|a| >= |b|` (or `a == 0`)
#[inline]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// `a * b = p + err` exactly
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = a.mul_add(b, -p);
    (p, err)
}

impl ExtendedSum {
    /// The empty sum, `0.0 + 0.0`
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// Create an empty sum
    pub fn new() -> Self {
        Self::ZERO
    }

    /// The sum rounded to the nearest `f64`
    #[inline]
    pub fn value(self) -> f64 {
        self.hi + self.lo
    }

    /// `self / denom`, rounded to `f64` once
    ///
    /// One Newton correction step: the first quotient `q1 = hi / denom.hi`
    /// is refined by the exactly computed remainder `self - q1 * denom`.
    /// `denom` must be non-zero.
    pub fn ratio(self, denom: ExtendedSum) -> f64 {
        let q1 = self.hi / denom.hi;
        let (p, p_err) = two_prod(q1, denom.hi);
        let remainder = ((self.hi - p) - p_err + self.lo) - q1 * denom.lo;
        q1 + remainder / denom.hi
    }
}

impl AddAssign<f64> for ExtendedSum {
    #[inline]
    fn add_assign(&mut self, x: f64) {
        let (s, err) = two_sum(self.hi, x);
        let (hi, lo) = quick_two_sum(s, err + self.lo);
        self.hi = hi;
        self.lo = lo;
    }
}

/// A sum holding exactly `x`
impl From<f64> for ExtendedSum {
    fn from(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum_is_exact() {
        let (s, err) = two_sum(1.0, 1e-20);
        assert_eq!(s, 1.0);
        assert_eq!(err, 1e-20);
    }

    #[test]
    fn test_two_prod_is_exact() {
        let a = 1.0 + f64::EPSILON;
        let (p, err) = two_prod(a, a);
        // (1 + e)^2 = 1 + 2e + e^2; the e^2 term does not fit in p
        assert_eq!(p, 1.0 + 2.0 * f64::EPSILON);
        assert_eq!(err, f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn test_keeps_increments_below_half_ulp() {
        let mut plain = 1.0f64;
        let mut extended = ExtendedSum::from(1.0);
        for _ in 0..10 {
            plain += 1e-16;
            extended += 1e-16;
        }
        assert_eq!(plain, 1.0);
        assert!(extended.value() > 1.0);
        assert!((extended.value() - (1.0 + 1e-15)).abs() <= f64::EPSILON);
    }

    #[test]
    fn test_cancellation() {
        let mut sum = ExtendedSum::new();
        sum += 1e16;
        sum += 1.0;
        sum += -1e16;
        assert_eq!(sum.value(), 1.0);
    }

    #[test]
    fn test_ratio_matches_correctly_rounded_division() {
        let third = ExtendedSum::from(1.0).ratio(ExtendedSum::from(3.0));
        assert_eq!(third, 1.0 / 3.0);

        let mut num = ExtendedSum::new();
        num += 2.0;
        num += 5.0;
        let mut denom = ExtendedSum::new();
        denom += 7.0;
        assert_eq!(num.ratio(denom), 1.0);
    }

    #[test]
    fn test_ratio_uses_low_word() {
        let mut num = ExtendedSum::from(1.0);
        for _ in 0..10 {
            num += 1e-16;
        }
        let half = num.ratio(ExtendedSum::from(2.0));
        assert!(half > 0.5, "low word lost: {}", half);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(ExtendedSum::default(), ExtendedSum::ZERO);
        assert_eq!(ExtendedSum::new().value(), 0.0);
    }
}
