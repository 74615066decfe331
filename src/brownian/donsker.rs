// src/brownian/donsker.rs
//! Donsker invariance-principle evaluation of Brownian motion
//!
//! # Mathematical Framework
//!
//! Donsker's theorem: for i.i.d. `ξ_i` with mean 0 and variance 1, the
//! rescaled random walk
//! ```text
//! W_n(t) = (1/√n) · ( Σ_{i=1}^{⌊nt⌋} ξ_i + (nt - ⌊nt⌋) · ξ_{⌊nt⌋+1} )
//! ```
//! converges in distribution to `W(t)` as `n → ∞`. This module evaluates
//! `W_n(t)` with standard normal steps, `n` being the walk resolution in
//! steps per unit time.
//!
//! Like the Faber-Schauder evaluator this is pointwise: each call draws a
//! fresh walk, so different query times come from different walks.

use crate::rng::GaussianSampler;

/// Evaluate the rescaled random walk at a single time `t ≥ 0`, with
/// `steps_per_unit` walk steps per unit of time.
pub fn evaluate(steps_per_unit: u32, t: f64, sampler: &mut GaussianSampler) -> f64 {
    let n = steps_per_unit as f64;
    let whole = (n * t).floor();
    let fraction = n * t - whole;

    let mut sum = 0.0;
    for _ in 0..whole as u64 {
        sum += sampler.sample();
    }
    sum += fraction * sampler.sample();

    sum / n.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_at_zero_is_zero() {
        let mut sampler = GaussianSampler::from_seed(11);
        assert_eq!(evaluate(128, 0.0, &mut sampler), 0.0);
    }

    #[test]
    fn test_variance_near_t() {
        // Var W_n(t) = (⌊nt⌋ + (nt - ⌊nt⌋)²) / n ≈ t; check the sample
        // variance over many independent evaluations.
        let mut sampler = GaussianSampler::from_seed(11);
        let t = 0.5;
        let runs = 4000;

        let draws: Vec<f64> = (0..runs).map(|_| evaluate(64, t, &mut sampler)).collect();
        let mean = draws.iter().sum::<f64>() / runs as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / runs as f64;

        assert!(mean.abs() < 0.05, "mean {} too far from 0", mean);
        assert!((var - t).abs() < 0.06, "variance {} too far from {}", var, t);
    }
}
