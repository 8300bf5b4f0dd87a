//! Unnormalized probability mass functions
//!
//! `rho` is the ideal Soliton mass and `tau` the robust correction added on
//! top of it. Neither function validates its arguments; the table builders
//! in [`super::soliton`] check parameters once before calling them `k` times.

/// Ideal Soliton mass at degree `i`
///
/// - `rho(k, 1) = 1/k`
/// - `rho(k, i) = 1/(i*(i-1))` for `1 < i <= k`
///
/// Requires `k >= 1` and `1 <= i <= k`.
#[inline]
pub fn rho(k: u64, i: u64) -> f64 {
    if i == 1 {
        1.0 / k as f64
    } else {
        // f64 product: i*(i-1) overflows u64 long before k gets unreasonable
        let i = i as f64;
        1.0 / (i * (i - 1.0))
    }
}

/// Expected ripple size `R = c * ln(k/delta) * sqrt(k)`
#[inline]
pub fn ripple(c: f64, delta: f64, k: u64) -> f64 {
    let kf = k as f64;
    c * (kf / delta).ln() * kf.sqrt()
}

/// Degree at which `tau` places its spike: `round(k / R)`
///
/// Rounds half away from zero. A result of 0 means the ripple exceeds `2k`
/// and the robust correction is undefined.
#[inline]
pub fn spike_index(k: u64, ripple: f64) -> u64 {
    (k as f64 / ripple).round() as u64
}

/// Robust Soliton correction at degree `i`
///
/// - `i < k/R`  : `R / (i*k)`
/// - `i == k/R` : `R * (ln R - ln delta) / k`
/// - `i > k/R`  : `0`
///
/// where `k/R` is [`spike_index`]. Requires `c > 0`, `0 < delta < 1` and
/// `k >= 1`.
pub fn tau(c: f64, delta: f64, k: u64, i: u64) -> f64 {
    let r = ripple(c, delta, k);
    tau_at(r, delta, k, spike_index(k, r), i)
}

/// [`tau`] with the ripple and spike index already computed
#[inline]
pub(crate) fn tau_at(ripple: f64, delta: f64, k: u64, spike: u64, i: u64) -> f64 {
    if i < spike {
        ripple / (i as f64 * k as f64)
    } else if i == spike {
        ripple * (ripple.ln() - delta.ln()) / k as f64
    } else {
        0.0
    }
}
