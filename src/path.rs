// src/path.rs
//! Time grids and sample paths.
//!
//! A [`TimeGrid`] is the `(t_max, dt)` pair every generator and solver
//! works on; validation happens once, at construction, so downstream code
//! never re-checks bounds. A [`SamplePath`] is the finished product: the
//! state of a process at `t_j = j·dt` for `j = 0..=steps`, immutable once
//! built and exclusively owned by its caller.

use crate::error::validation::{validate_step_size, validate_time_bound};
use crate::error::SdeResult;
use std::ops::Index;

/// Evenly spaced time grid over `[0, t_max]` with step `dt`.
///
/// The number of steps is `floor(t_max / dt)`, so a path on this grid has
/// `steps() + 1` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t_max: f64,
    dt: f64,
    steps: usize,
}

impl TimeGrid {
    /// Grid from a horizon and a step size. Fails fast on `t_max <= 0`
    /// (invalid time bound) or `dt <= 0` (invalid step size). The step
    /// count is `floor(t_max / dt)`.
    pub fn new(t_max: f64, dt: f64) -> SdeResult<Self> {
        validate_time_bound(t_max)?;
        validate_step_size(dt)?;
        Ok(TimeGrid {
            t_max,
            dt,
            steps: (t_max / dt).floor() as usize,
        })
    }

    /// Grid from a horizon and a step count. Storing the count directly
    /// avoids the floor of `t_max / dt` losing a step to rounding when
    /// `t_max / steps` is not exactly representable.
    pub fn from_steps(t_max: f64, steps: usize) -> SdeResult<Self> {
        validate_time_bound(t_max)?;
        validate_step_size(steps as f64)?;
        Ok(TimeGrid {
            t_max,
            dt: t_max / steps as f64,
            steps,
        })
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps; a path on this grid has `steps() + 1` points.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Grid time of index `j`.
    pub fn time(&self, j: usize) -> f64 {
        j as f64 * self.dt
    }
}

/// A discretized trajectory: values at `t_j = j·dt`.
///
/// Built in one pass by a generator or solver and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePath {
    dt: f64,
    values: Vec<f64>,
}

impl SamplePath {
    /// Wrap an already computed value sequence. `values[0]` is understood
    /// to be the initial value of the process.
    pub fn from_values(dt: f64, values: Vec<f64>) -> Self {
        SamplePath { dt, values }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of grid points, i.e. `steps + 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Grid time of index `j`.
    pub fn time(&self, j: usize) -> f64 {
        j as f64 * self.dt
    }

    /// Final grid value.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Successive increments `values[j+1] - values[j]`.
    pub fn increments(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.windows(2).map(|w| w[1] - w[0])
    }

    /// `(t_j, x_j)` pairs, the shape the CSV layer consumes.
    pub fn enumerate_times(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(j, &x)| (j as f64 * self.dt, x))
    }
}

impl Index<usize> for SamplePath {
    type Output = f64;

    fn index(&self, j: usize) -> &f64 {
        &self.values[j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_validation() {
        assert!(TimeGrid::new(1.0, 0.25).is_ok());
        assert!(TimeGrid::new(0.0, 0.25).is_err());
        assert!(TimeGrid::new(-1.0, 0.25).is_err());
        assert!(TimeGrid::new(1.0, 0.0).is_err());
        assert!(TimeGrid::new(1.0, -0.5).is_err());
        assert!(TimeGrid::from_steps(1.0, 0).is_err());
    }

    #[test]
    fn test_grid_steps() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        assert_eq!(grid.steps(), 4);
        assert_eq!(grid.time(2), 0.5);

        let grid = TimeGrid::from_steps(2.0, 8).unwrap();
        assert_eq!(grid.steps(), 8);
        assert_eq!(grid.dt(), 0.25);

        // Non-dyadic counts must survive the dt round trip.
        let grid = TimeGrid::from_steps(1.0, 49).unwrap();
        assert_eq!(grid.steps(), 49);
    }

    #[test]
    fn test_path_accessors() {
        let path = SamplePath::from_values(0.5, vec![0.0, 1.0, 3.0]);
        assert_eq!(path.len(), 3);
        assert_eq!(path[1], 1.0);
        assert_eq!(path.time(2), 1.0);
        assert_eq!(path.last(), Some(3.0));

        let incs: Vec<f64> = path.increments().collect();
        assert_eq!(incs, vec![1.0, 2.0]);

        let pairs: Vec<(f64, f64)> = path.enumerate_times().collect();
        assert_eq!(pairs[2], (1.0, 3.0));
    }
}
