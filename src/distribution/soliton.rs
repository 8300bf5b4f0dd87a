//! Soliton and Robust Soliton degree distributions
//!
//! Both variants are stored the same way: a table of `k` split points that
//! cuts `[0, 1)` into `k` pieces, one per degree. `splits[i-1]` is
//! `P(X <= i)`, the table is non-decreasing, and the last entry is exactly
//! `1.0`. Sampling is inverse transform: draw `u` in `[0, 1)` and binary
//! search for the first split `>= u`.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use soliton::Soliton;
//!
//! let dist = Soliton::robust(1000, 0.1, 0.05).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//!
//! let degree = dist.sample(&mut rng);
//! assert!((1..=1000).contains(&degree));
//! ```

use super::pmf::{self, rho};
use super::precise::ExtendedSum;
use crate::error::SolitonError;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Which mass function a table was built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolitonKind {
    /// `rho` alone
    Ideal,
    /// `rho + tau`, normalized
    Robust { c: f64, delta: f64 },
}

impl fmt::Display for SolitonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolitonKind::Ideal => write!(f, "ideal"),
            SolitonKind::Robust { c, delta } => write!(f, "robust(c={}, delta={})", c, delta),
        }
    }
}

/// Soliton or Robust Soliton distribution over degrees `{1, ..., k}`
///
/// Immutable once built. Sampling borrows a random source per call, so one
/// table can be shared (e.g. behind an `Arc`) by any number of threads that
/// each own their own generator.
///
/// Equality is structural: two tables are equal when `k` matches and every
/// split point is bit-for-bit identical. The variant is not compared.
#[derive(Debug, Clone)]
pub struct Soliton {
    k: u64,
    /// `[0, 1)` cut into `k` pieces; `splits[k-1] == 1.0`
    splits: Vec<f64>,
    kind: SolitonKind,
}

impl Soliton {
    /// Build the ideal Soliton distribution
    ///
    /// ```text
    /// p(1) = 1/k
    /// p(i) = 1/(i*(i-1))    for 1 < i <= k
    /// ```
    ///
    /// The mass already sums to one, so the CDF is a plain running sum in
    /// increasing degree order. Only the first `k-1` splits are accumulated;
    /// the last is pinned to `1.0`.
    pub fn ideal(k: u64) -> Result<Self, SolitonError> {
        let len = table_len(k)?;

        let mut splits = Vec::with_capacity(len);
        let mut last = 0.0;
        for i in 1..k {
            last += rho(k, i);
            splits.push(last);
        }
        splits.push(1.0);

        debug!(k, "built ideal soliton table");

        Ok(Self {
            k,
            splits,
            kind: SolitonKind::Ideal,
        })
    }

    /// Build the Robust Soliton distribution
    ///
    /// The mass at degree `i` is `rho(k, i) + tau(c, delta, k, i)`, divided
    /// by the total over `1..=k`. `tau` contributes terms from `O(R/k)` down
    /// to `O(R/k^2)`, so both the prefix sums and the total are accumulated
    /// in double-double precision. Each split is rounded to `f64` exactly
    /// once, after the division.
    ///
    /// See <https://en.wikipedia.org/wiki/Soliton_distribution#Robust_distribution>
    /// for the meaning of `c` and `delta`.
    pub fn robust(k: u64, c: f64, delta: f64) -> Result<Self, SolitonError> {
        Self::validate_params(k, c, delta)?;
        let len = table_len(k)?;
        let kind = SolitonKind::Robust { c, delta };

        // Point mass at 1; the spike index is meaningless here
        if k == 1 {
            return Ok(Self {
                k,
                splits: vec![1.0],
                kind,
            });
        }

        let ripple = pmf::ripple(c, delta, k);
        let spike = pmf::spike_index(k, ripple);
        if spike > k {
            debug!(k, spike, "spike index lies beyond the support, tau has no spike term");
        }

        let mut running = ExtendedSum::new();
        let mut prefixes = Vec::with_capacity(len - 1);
        for i in 1..=k {
            running += rho(k, i);
            running += pmf::tau_at(ripple, delta, k, spike, i);
            if i < k {
                prefixes.push(running);
            }
        }
        let total = running;

        let mut splits: Vec<f64> = prefixes.into_iter().map(|p| p.ratio(total)).collect();
        splits.push(1.0);

        debug!(
            k,
            c,
            delta,
            ripple,
            spike,
            total = total.value(),
            "built robust soliton table"
        );

        Ok(Self { k, splits, kind })
    }

    /// Check robust construction parameters without building anything
    ///
    /// Besides the plain ranges on `k`, `c` and `delta`, rejects parameter
    /// sets whose ripple `R` exceeds `2k`: `round(k/R)` is then 0 and `tau`
    /// has no defined shape. A spike index beyond `k` is accepted; `tau` then
    /// takes its `R/(i*k)` branch for every degree.
    pub fn validate_params(k: u64, c: f64, delta: f64) -> Result<(), SolitonError> {
        if k == 0 {
            return Err(SolitonError::EmptySupport);
        }
        if !(c.is_finite() && c > 0.0) {
            return Err(SolitonError::InvalidC { c });
        }
        if !(delta.is_finite() && delta > 0.0 && delta < 1.0) {
            return Err(SolitonError::InvalidDelta { delta });
        }
        if k > 1 {
            let ripple = pmf::ripple(c, delta, k);
            if pmf::spike_index(k, ripple) == 0 {
                return Err(SolitonError::DegenerateSpike { k, ripple });
            }
        }
        Ok(())
    }

    /// Draw one degree in `{1, ..., k}`
    ///
    /// Consumes exactly one `f64` from `rng`.
    ///
    /// # Panics
    ///
    /// If the draw lands past the last split, which means either the table
    /// is corrupt or `rng` produced a value `>= 1.0`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let u: f64 = rng.gen();
        self.degree_at(u)
    }

    /// Inverse CDF: the smallest degree `i` with `P(X <= i) >= u`
    ///
    /// # Panics
    ///
    /// If `u` is greater than the last split (`u > 1.0`).
    #[inline]
    pub fn degree_at(&self, u: f64) -> u64 {
        let idx = self.splits.partition_point(|&split| split < u);
        assert!(
            (idx as u64) < self.k,
            "uniform draw {} fell past the last split of a k = {} table",
            u,
            self.k
        );
        idx as u64 + 1
    }

    /// Expected degree, `sum(i * p(i))`, in one pass over the splits
    pub fn mean(&self) -> f64 {
        let mut mean = 0.0;
        let mut last_cdf = 0.0;
        for (idx, &split) in self.splits.iter().enumerate() {
            mean += (split - last_cdf) * (idx + 1) as f64;
            last_cdf = split;
        }
        mean
    }

    /// Probability mass per degree; element `i-1` is `P(X = i)`
    pub fn pmf(&self) -> Vec<f64> {
        let mut last = 0.0;
        self.splits
            .iter()
            .map(|&split| {
                let p = split - last;
                last = split;
                p
            })
            .collect()
    }

    /// `P(X = i)`, zero outside `{1, ..., k}`
    pub fn pmf_at(&self, i: u64) -> f64 {
        if i == 0 || i > self.k {
            return 0.0;
        }
        self.cdf(i) - self.cdf(i - 1)
    }

    /// `P(X <= i)`
    pub fn cdf(&self, i: u64) -> f64 {
        match i {
            0 => 0.0,
            i if i >= self.k => 1.0,
            i => self.splits[(i - 1) as usize],
        }
    }

    /// Largest degree in the support
    pub fn k(&self) -> u64 {
        self.k
    }

    /// The split table, `splits()[i-1] == P(X <= i)`
    pub fn splits(&self) -> &[f64] {
        &self.splits
    }

    /// Which mass function built this table
    pub fn kind(&self) -> SolitonKind {
        self.kind
    }
}

/// Table length for `k`, rejecting empty and unaddressable supports
fn table_len(k: u64) -> Result<usize, SolitonError> {
    if k == 0 {
        return Err(SolitonError::EmptySupport);
    }
    usize::try_from(k).map_err(|_| SolitonError::SupportTooLarge { k })
}

impl PartialEq for Soliton {
    fn eq(&self, other: &Self) -> bool {
        if self.k != other.k {
            return false;
        }
        if self.splits.len() != other.splits.len() {
            return false;
        }
        self.splits
            .iter()
            .zip(&other.splits)
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Soliton {}

impl rand::distributions::Distribution<u64> for Soliton {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        self.degree_at(rng.gen())
    }
}

impl fmt::Display for Soliton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} soliton(k={})", self.kind, self.k)
    }
}
