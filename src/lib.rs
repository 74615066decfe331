//! # ito-path: Pathwise Simulation of Scalar Itô SDEs
//!
//! A Rust library for simulating scalar stochastic processes governed by
//! Itô stochastic differential equations, aimed at reproducible numerical
//! study of discretization schemes.
//!
//! ## Key Features
//!
//! - **Three Brownian constructions**: incremental (the reference method),
//!   Faber-Schauder series, and Donsker's invariance-principle evaluator
//! - **Two discretization schemes**: Euler-Maruyama and Milstein, each
//!   able to draw increments on the fly or follow a supplied Brownian path
//! - **Reference comparison**: deterministic Itô integration composes into
//!   closed-form processes (Ornstein-Uhlenbeck) for pathwise error study
//! - **Reproducible**: every random draw flows through an explicit,
//!   seedable [`rng::GaussianSampler`]; no global generator state
//! - **Fail-fast numerics**: validated time grids, checked path lengths,
//!   and divergence detection that reports the failing step and keeps the
//!   finite prefix
//!
//! ## Quick Start
//!
//! ```rust
//! use ito_path::models::OuProcess;
//! use ito_path::path::TimeGrid;
//! use ito_path::rng::GaussianSampler;
//! use ito_path::solvers::euler_maruyama::EulerMaruyama;
//!
//! // Mean-reverting process dX = 0.5 (0.1 - X) dt + 0.2 dW on [0, 1]
//! let grid = TimeGrid::new(1.0, 2f64.powi(-7)).expect("valid grid");
//! let process = OuProcess::new(0.5, 0.1, 0.2);
//! let mut sampler = GaussianSampler::from_seed(37);
//!
//! let path = EulerMaruyama::solve(&grid, 1.0, &process, &mut sampler)
//!     .expect("finite path");
//! assert_eq!(path.len(), grid.steps() + 1);
//! assert_eq!(path[0], 1.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The library approximates solutions of `dX = a(t, X) dt + b(t, X) dW`
//! one path at a time. Brownian increments over a step of width `Δt` are
//! `N(0, Δt)`; Euler-Maruyama applies them directly (strong order 0.5),
//! Milstein adds the Itô correction `½ b b' ((ΔW)² − Δt)` (strong order 1).

// Module declarations
pub mod brownian;
pub mod calculus;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod path;
pub mod reference;
pub mod rng;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use path::{SamplePath, TimeGrid};
pub use rng::{GaussianSampler, InitialCondition};
