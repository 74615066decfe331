// src/calculus.rs
//! Deterministic Itô integration and grid-alignment utilities.
//!
//! # Mathematical Framework
//!
//! For a deterministic integrand `f` and a Brownian path `W` the Itô
//! integral is approximated by the left Riemann-Stieltjes sum
//! ```text
//! ∫₀^{t_j} f(s) dW(s) ≈ Σ_{i<j} f(t_i) · (W_{i+1} - W_i)
//! ```
//! Evaluating `f` at the *left* endpoint is not a convention that can be
//! traded away: the Itô integral is defined through non-anticipating
//! integrands, and a midpoint or right-endpoint rule converges to a
//! different (Stratonovich-shifted) limit.
//!
//! The interpolation and truncation helpers align paths sampled at
//! different resolutions, e.g. a coarse solver output against a fine
//! reference process driven by the same Brownian path.

use crate::error::validation::validate_factor;
use crate::error::{SdeError, SdeResult};
use crate::path::{SamplePath, TimeGrid};

/// Running Itô integral of a deterministic integrand against the
/// increments of `brownian`, on `grid`.
///
/// `I[0] = 0` (integrating over `[0, 0]`); `I[j+1] = I[j] + f(t_j)·ΔW_j`.
///
/// # Errors
///
/// `PathTooShort` when `brownian` has fewer than `grid.steps() + 1` points.
pub fn ito_integral<F>(
    grid: &TimeGrid,
    brownian: &SamplePath,
    integrand: F,
) -> SdeResult<SamplePath>
where
    F: Fn(f64) -> f64,
{
    let steps = grid.steps();
    if brownian.len() < steps + 1 {
        return Err(SdeError::PathTooShort {
            required: steps + 1,
            actual: brownian.len(),
        });
    }

    let mut values = Vec::with_capacity(steps + 1);
    values.push(0.0);

    for j in 0..steps {
        let d_brownian = brownian[j + 1] - brownian[j];
        values.push(values[j] + integrand(grid.time(j)) * d_brownian);
    }

    Ok(SamplePath::from_values(grid.dt(), values))
}

/// Linearly interpolate `coarse` onto a grid `factor` times finer.
///
/// The output has length `factor · coarse.len()`: index `factor·j` carries
/// `coarse[j]` and the slots in between are filled linearly. The
/// `factor - 1` slots past the last coarse point have no right endpoint to
/// interpolate towards and repeat the final value.
pub fn linear_interpolation(coarse: &[f64], factor: usize) -> SdeResult<Vec<f64>> {
    validate_factor(factor)?;

    let mut fine = vec![0.0; factor * coarse.len()];

    for j in 0..coarse.len() {
        fine[factor * j] = coarse[j];
        if j > 0 {
            let increment = coarse[j] - coarse[j - 1];
            for k in 1..factor {
                fine[(j - 1) * factor + k] =
                    coarse[j - 1] + k as f64 / factor as f64 * increment;
            }
        }
    }

    if let Some(&last) = coarse.last() {
        for slot in fine.iter_mut().skip((coarse.len() - 1) * factor + 1) {
            *slot = last;
        }
    }

    Ok(fine)
}

/// Keep every `factor`-th point of a fine path, producing the coarse path
/// a solver runs on when the driving Brownian motion is generated at a
/// higher resolution.
pub fn truncate_path(fine: &SamplePath, factor: usize) -> SdeResult<SamplePath> {
    validate_factor(factor)?;

    let values: Vec<f64> = fine
        .values()
        .iter()
        .step_by(factor)
        .copied()
        .collect();

    Ok(SamplePath::from_values(fine.dt() * factor as f64, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brownian::naive;
    use crate::rng::GaussianSampler;

    #[test]
    fn test_interpolation_exact() {
        let fine = linear_interpolation(&[0.0, 10.0], 4).unwrap();
        assert_eq!(fine.len(), 8);
        assert_eq!(&fine[0..5], &[0.0, 2.5, 5.0, 7.5, 10.0]);
        // Tail past the last coarse point repeats the final value.
        assert_eq!(&fine[5..], &[10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_interpolation_factor_one_is_identity() {
        let data = [1.0, -2.0, 3.5];
        assert_eq!(linear_interpolation(&data, 1).unwrap(), data.to_vec());
        assert!(linear_interpolation(&data, 0).is_err());
    }

    #[test]
    fn test_ito_integral_of_one_telescopes() {
        // ∫ 1 dW over [0, t_j] is exactly W(t_j) - W(0).
        let grid = TimeGrid::new(1.0, 0.125).unwrap();
        let mut sampler = GaussianSampler::from_seed(3);
        let brownian = naive::sample_path(&grid, &mut sampler);

        let integral = ito_integral(&grid, &brownian, |_| 1.0).unwrap();
        for j in 0..integral.len() {
            assert!((integral[j] - brownian[j]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ito_integral_path_too_short() {
        let grid = TimeGrid::new(1.0, 0.125).unwrap();
        let short = SamplePath::from_values(0.125, vec![0.0, 0.1, 0.2]);
        let err = ito_integral(&grid, &short, |_| 1.0).unwrap_err();
        match err {
            SdeError::PathTooShort { required, actual } => {
                assert_eq!(required, 9);
                assert_eq!(actual, 3);
            }
            other => panic!("expected PathTooShort, got {}", other),
        }
    }

    #[test]
    fn test_truncate_path() {
        let fine = SamplePath::from_values(0.25, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let coarse = truncate_path(&fine, 4).unwrap();
        assert_eq!(coarse.values(), &[0.0, 4.0, 8.0]);
        assert_eq!(coarse.dt(), 1.0);
    }
}
