// src/models/gbm.rs
use super::model::ItoProcess;

/// Geometric Brownian motion `dX = mu X dt + sigma X dW`.
///
/// The state-dependent diffusion makes this the standard example where the
/// Milstein correction actually differs from Euler-Maruyama.
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Exact solution `x0 · exp((mu - sigma²/2) t + sigma W(t))` along a
    /// given Brownian value, for strong-error checks.
    pub fn exact(&self, x0: f64, t: f64, w_t: f64) -> f64 {
        x0 * ((self.mu - 0.5 * self.sigma * self.sigma) * t + self.sigma * w_t).exp()
    }
}

impl ItoProcess for Gbm {
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.mu * x
    }

    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.sigma * x
    }

    fn diffusion_derivative(&self, _t: f64, _x: f64, _eps: f64) -> f64 {
        self.sigma
    }
}
