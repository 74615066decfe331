// src/brownian/schauder.rs
//! Faber-Schauder series evaluation of Brownian motion
//!
//! # Mathematical Framework
//!
//! Lévy's construction expands `W` on `[0, 1]` over the Faber-Schauder
//! system (integrated Haar wavelets):
//! ```text
//! W(t) = Z·t + Σ_{j≥0} Σ_{k=0}^{2^j - 1} Z_{j,k} · ψ_{j,k}(t)
//! ```
//! with i.i.d. standard normal coefficients and
//! ```text
//! ψ_{j,k}(t) = 2^{-j/2} · triangle(2^j · t - k)
//! ```
//! Truncating the outer sum at `level` gives a pointwise approximation
//! whose cost is `O(2^level)` per evaluation.
//!
//! # Pointwise semantics
//!
//! [`evaluate`] redraws every coefficient on every call. Two calls at
//! `t` and `t + ε` are therefore independent `N(0, ·)` variables, not two
//! points of one continuous path. This matches the intended use, studying
//! how the truncated series converges in distribution; building a
//! consistent trajectory would require caching the `Z_{j,k}` across calls,
//! which this module deliberately does not do.

use crate::rng::GaussianSampler;

/// The triangle (tent) function: `x` on `[0, 0.5]`, `1 - x` on `(0.5, 1]`,
/// zero elsewhere.
pub fn triangle(x: f64) -> f64 {
    if (0.0..=0.5).contains(&x) {
        x
    } else if x > 0.5 && x <= 1.0 {
        1.0 - x
    } else {
        0.0
    }
}

/// Faber-Schauder basis function `ψ_{scale,shift}` evaluated at `x`.
pub fn basis(scale: u32, shift: u32, x: f64) -> f64 {
    let dilatation = 2f64.powf(-0.5 * scale as f64);
    let zoom = triangle(2f64.powi(scale as i32) * x - shift as f64);
    dilatation * zoom
}

/// Evaluate the series truncated at `level` at a single time `t ∈ [0, 1]`.
///
/// Draws `2^(level+1)` fresh coefficients; see the module docs for why the
/// result is a one-shot sample rather than a point on a reusable path.
pub fn evaluate(level: u32, t: f64, sampler: &mut GaussianSampler) -> f64 {
    let mut sum = 0.0;

    for scale in 0..=level {
        for shift in 0..(1u64 << scale) {
            sum += sampler.sample() * basis(scale, shift as u32, t);
        }
    }

    sum + sampler.sample() * t
}
