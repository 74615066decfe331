// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{j} = X_{j-1} + a(t_{j-1}, X_{j-1}) Δt + b(t_{j-1}, X_{j-1}) ΔW_j
//! ```
//!
//! Where:
//! - `a(t,x)` is the drift coefficient
//! - `b(t,x)` is the diffusion coefficient
//! - `ΔW_j ~ N(0, Δt)` are independent normal increments
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: Conditionally stable (depends on drift/diffusion)

use crate::error::SdeResult;
use crate::models::model::ItoProcess;
use crate::path::{SamplePath, TimeGrid};
use crate::rng::GaussianSampler;
use crate::solvers::{check_driving_path, integrate_path, sampled_noise};

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    pub fn new() -> Self {
        EulerMaruyama {}
    }

    /// Single Euler-Maruyama step with a given Brownian increment `dw`.
    pub fn step<P: ItoProcess>(process: &P, x: &mut f64, t: f64, dt: f64, dw: f64) {
        let drift_term = process.drift(t, *x) * dt;
        let diffusion_term = process.diffusion(t, *x) * dw;
        *x += drift_term + diffusion_term;
    }

    /// Approximate the solution over `grid`, drawing `ΔW = √Δt · Z` fresh
    /// from `sampler` at every step.
    pub fn solve<P: ItoProcess>(
        grid: &TimeGrid,
        init: f64,
        process: &P,
        sampler: &mut GaussianSampler,
    ) -> SdeResult<SamplePath> {
        Self::run(grid, init, process, sampled_noise(grid.dt(), sampler))
    }

    /// Approximate the solution over `grid`, reading increments off a
    /// supplied Brownian path (checked to cover the grid).
    pub fn solve_along<P: ItoProcess>(
        grid: &TimeGrid,
        init: f64,
        process: &P,
        brownian: &SamplePath,
    ) -> SdeResult<SamplePath> {
        check_driving_path(grid, brownian)?;
        Self::run(grid, init, process, |j| brownian[j] - brownian[j - 1])
    }

    fn run<P: ItoProcess>(
        grid: &TimeGrid,
        init: f64,
        process: &P,
        noise: impl FnMut(usize) -> f64,
    ) -> SdeResult<SamplePath> {
        let dt = grid.dt();
        integrate_path("euler_maruyama", grid, init, noise, |t, x, dw| {
            let mut next = x;
            Self::step(process, &mut next, t, dt, dw);
            next
        })
    }
}

impl Default for EulerMaruyama {
    fn default() -> Self {
        Self::new()
    }
}
