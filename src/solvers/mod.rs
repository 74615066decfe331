// src/solvers/mod.rs
//! Discretization schemes for scalar Itô SDEs.
//!
//! Both schemes run in two noise modes: increments drawn on the fly from a
//! [`GaussianSampler`], or increments read off an externally supplied
//! Brownian [`SamplePath`] (which lets several consumers share one driving
//! trajectory).

pub mod euler_maruyama;
pub mod milstein;

use crate::error::validation::validate_finite;
use crate::error::{SdeError, SdeResult};
use crate::path::{SamplePath, TimeGrid};
use crate::rng::GaussianSampler;

/// Single forward pass shared by all schemes: seed `values[0]`, step with
/// the scheme-specific update, stop at the first non-finite state keeping
/// the finite prefix.
pub(crate) fn integrate_path<FNoise, FStep>(
    method: &str,
    grid: &TimeGrid,
    init: f64,
    mut noise: FNoise,
    step: FStep,
) -> SdeResult<SamplePath>
where
    FNoise: FnMut(usize) -> f64,
    FStep: Fn(f64, f64, f64) -> f64,
{
    validate_finite("init", init)?;

    let steps = grid.steps();
    let mut values = Vec::with_capacity(steps + 1);
    values.push(init);

    for j in 1..=steps {
        let dw = noise(j);
        let next = step(grid.time(j - 1), values[j - 1], dw);

        if !next.is_finite() {
            return Err(SdeError::NumericDivergence {
                method: method.to_string(),
                step: j,
                value: next,
                prefix: values,
            });
        }
        values.push(next);
    }

    Ok(SamplePath::from_values(grid.dt(), values))
}

/// Check that a supplied driving path covers the grid.
pub(crate) fn check_driving_path(grid: &TimeGrid, brownian: &SamplePath) -> SdeResult<()> {
    let required = grid.steps() + 1;
    if brownian.len() < required {
        Err(SdeError::PathTooShort {
            required,
            actual: brownian.len(),
        })
    } else {
        Ok(())
    }
}

/// Increment source drawing `ΔW = √dt · Z` fresh per step.
pub(crate) fn sampled_noise<'a>(
    dt: f64,
    sampler: &'a mut GaussianSampler,
) -> impl FnMut(usize) -> f64 + 'a {
    let sqrt_dt = dt.sqrt();
    move |_| sqrt_dt * sampler.sample()
}
