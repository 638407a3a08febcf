//! Stateless transform application.
//!
//! An external fitter relies on two primitive operations:
//! - apply a kind with explicit parameter values (while estimating them)
//! - check a series for finiteness (on raw input, and on kernel output)
//!
//! These are implemented here for each transform kind.

use crate::domain::{Params, TransformKind};
use crate::math::power_kernel;

/// Apply `kind` to a single value with explicit parameters.
pub fn apply_scalar(kind: TransformKind, x: f64, params: Params) -> f64 {
    let u = params.a * x + params.b;
    match kind {
        TransformKind::Abs => u.abs(),
        TransformKind::Loge => u.ln(),
        TransformKind::Log2 => u.log2(),
        TransformKind::Log10 => u.log10(),
        TransformKind::Exp => u.exp(),
        TransformKind::Power2 => power_kernel(u, 2.0),
        TransformKind::Power3 => power_kernel(u, 3.0),
        TransformKind::Power4 => power_kernel(u, 4.0),
        TransformKind::Sqrt => power_kernel(u, 0.5),
        TransformKind::Inv => power_kernel(u, -1.0),
        TransformKind::InvPower2 => power_kernel(u, -2.0),
    }
}

/// Apply `kind` elementwise to a series with explicit parameters.
///
/// Pure and deterministic; the output has the same length as the input.
/// Domain violations are reported as NaN/infinite elements in the output,
/// never as an error.
pub fn apply(kind: TransformKind, x: &[f64], params: Params) -> Vec<f64> {
    x.iter().map(|&v| apply_scalar(kind, v, params)).collect()
}

/// Whether every element of `x` is finite (neither NaN nor infinite).
///
/// This is the contract baseline: it does not check per-kernel domains
/// (it accepts negative values that a logarithm will map to NaN). Callers
/// reject such candidates by validating the kernel output instead.
pub fn validate_input(x: &[f64]) -> bool {
    x.iter().all(|v| v.is_finite())
}
