// src/brownian/mod.rs
//! Three constructions of standard Brownian motion.
//!
//! [`naive`] builds a genuine discretized path from independent `N(0, dt)`
//! increments and is the reference method. [`schauder`] and [`donsker`] are
//! pointwise evaluators: they approximate the *distribution* of `W(t)` at a
//! single query time and redraw all of their randomness on every call, so
//! evaluations at nearby times are statistically independent. That makes
//! them useful for illustrating convergence of the underlying series, not
//! for producing a reusable trajectory.

pub mod donsker;
pub mod naive;
pub mod schauder;
