// src/brownian/naive.rs
//! Incremental Brownian path construction
//!
//! # Mathematical Framework
//!
//! For the standard Brownian motion `W`, increments over disjoint intervals
//! are independent and
//! ```text
//! W(t + h) - W(t) ~ N(0, h)
//! ```
//! so a path on an even grid follows directly from the definition:
//! ```text
//! W_0 = 0,    W_j = W_{j-1} + √dt · Z_j,    Z_j ~ N(0, 1) i.i.d.
//! ```
//!
//! This is the ground-truth construction: unlike the series and
//! invariance-principle evaluators it yields one self-consistent
//! trajectory, at the cost of computing the whole grid sequentially.

use crate::path::{SamplePath, TimeGrid};
use crate::rng::GaussianSampler;

/// Simulate a Brownian path on `grid`, starting at `W_0 = 0`.
pub fn sample_path(grid: &TimeGrid, sampler: &mut GaussianSampler) -> SamplePath {
    let steps = grid.steps();
    let sqrt_dt = grid.dt().sqrt();

    let mut values = Vec::with_capacity(steps + 1);
    values.push(0.0);

    for j in 1..=steps {
        let increment = sqrt_dt * sampler.sample();
        values.push(values[j - 1] + increment);
    }

    SamplePath::from_values(grid.dt(), values)
}
