//! Scalar kernels for the transform catalog.
//!
//! Every transform evaluates its kernel over the linear pre-map `u = a·x + b`.
//!
//! Numerical notes:
//! - Kernels are total over finite inputs: a domain violation (log of a
//!   non-positive `u`, fractional power of a negative `u`) produces NaN
//!   rather than an error, so elementwise application never unwinds
//!   mid-series. Callers screen kernel output for finiteness.
//! - Reciprocal powers add a small epsilon to the denominator, so `u = 0`
//!   yields a large finite value instead of infinity.

/// Stabilizing constant added to the denominator of reciprocal kernels.
pub const RECIP_EPS: f64 = 1e-15;

/// Evaluate the generalized power kernel at `u` with fixed exponent `n`.
///
/// For `n > 0` this is `u^n`; for `n ≤ 0` it is `1 / (u^(−n) + ε)`.
pub fn power_kernel(u: f64, n: f64) -> f64 {
    if n > 0.0 {
        u.powf(n)
    } else {
        1.0 / (u.powf(-n) + RECIP_EPS)
    }
}
