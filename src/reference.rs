// src/reference.rs
//! Analytically known reference processes and grid-aligned comparison.
//!
//! Some SDEs admit a closed form built from a deterministic Itô integral
//! of the *same* Brownian path the numerical scheme consumed. The
//! Ornstein-Uhlenbeck process `dX = -X dt + dW` is the canonical case:
//! ```text
//! X(t) = e^{-t} · ( X₀ + ∫₀ᵗ e^{s} dW(s) )
//! ```
//! Running the scheme and the closed form on one shared path gives a
//! pathwise (strong) error, not just an error in distribution.

use crate::calculus::{ito_integral, linear_interpolation};
use crate::error::SdeResult;
use crate::path::{SamplePath, TimeGrid};

/// Build a reference path `transform(t_j, x0 + I_j)` where `I` is the
/// running Itô integral of `integrand` against `brownian`.
pub fn reference_from_integral<F, G>(
    grid: &TimeGrid,
    x0: f64,
    brownian: &SamplePath,
    integrand: F,
    transform: G,
) -> SdeResult<SamplePath>
where
    F: Fn(f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    let integral = ito_integral(grid, brownian, integrand)?;

    let values = (0..integral.len())
        .map(|j| transform(grid.time(j), x0 + integral[j]))
        .collect();

    Ok(SamplePath::from_values(grid.dt(), values))
}

/// Closed-form Ornstein-Uhlenbeck path (`theta = 1`, `mu = 0`,
/// `sigma = 1`) driven by `brownian`.
pub fn ou_reference(grid: &TimeGrid, x0: f64, brownian: &SamplePath) -> SdeResult<SamplePath> {
    reference_from_integral(grid, x0, brownian, |s| s.exp(), |t, y| (-t).exp() * y)
}

/// Three index-aligned columns on a common fine grid, the shape the
/// comparison CSV consumes.
#[derive(Debug, Clone)]
pub struct GridComparison {
    pub times: Vec<f64>,
    pub approximation: Vec<f64>,
    pub reference: Vec<f64>,
}

impl GridComparison {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Largest absolute gap between the two columns.
    pub fn sup_error(&self) -> f64 {
        self.approximation
            .iter()
            .zip(&self.reference)
            .map(|(a, r)| (a - r).abs())
            .fold(0.0, f64::max)
    }
}

/// Align a coarse scheme output with a reference computed on a grid
/// `factor` times finer, interpolating the coarse path up.
pub fn compare_on_grid(
    approximation: &SamplePath,
    reference: &SamplePath,
    factor: usize,
) -> SdeResult<GridComparison> {
    let fine = linear_interpolation(approximation.values(), factor)?;
    let rows = fine.len().min(reference.len());

    Ok(GridComparison {
        times: (0..rows).map(|j| reference.time(j)).collect(),
        approximation: fine[..rows].to_vec(),
        reference: reference.values()[..rows].to_vec(),
    })
}
