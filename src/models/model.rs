// src/models/model.rs
//! The drift/diffusion seam between solvers and concrete processes.

/// A scalar Itô process `dX = drift(t, X) dt + diffusion(t, X) dW`.
///
/// Implementations must be pure: the solvers give no guarantee on how
/// often or in which order the coefficients are evaluated per step (the
/// Milstein scheme, for instance, evaluates the diffusion twice when it
/// falls back to a finite-difference derivative).
pub trait ItoProcess {
    fn drift(&self, t: f64, x: f64) -> f64;

    fn diffusion(&self, t: f64, x: f64) -> f64;

    /// `∂b/∂x`, used by the Milstein correction term.
    ///
    /// The default is a forward finite difference with the increment `eps`
    /// chosen by the caller. An `eps` near the precision floor makes the
    /// quotient catastrophically cancel; values around `1e-6` are a sound
    /// default for diffusions of order one. Models with a known derivative
    /// should override this and ignore `eps`.
    fn diffusion_derivative(&self, t: f64, x: f64, eps: f64) -> f64 {
        (self.diffusion(t, x + eps) - self.diffusion(t, x)) / eps
    }
}

/// Adapter turning a pair of ordinary closures `(t, x) -> f64` into an
/// [`ItoProcess`], so callers are not forced to define a struct per SDE.
pub struct Coefficients<F, G> {
    drift: F,
    diffusion: G,
}

impl<F, G> Coefficients<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    pub fn new(drift: F, diffusion: G) -> Self {
        Coefficients { drift, diffusion }
    }
}

impl<F, G> ItoProcess for Coefficients<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    fn drift(&self, t: f64, x: f64) -> f64 {
        (self.drift)(t, x)
    }

    fn diffusion(&self, t: f64, x: f64) -> f64 {
        (self.diffusion)(t, x)
    }
}
