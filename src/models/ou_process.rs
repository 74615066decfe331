// src/models/ou_process.rs
use super::model::ItoProcess;

/// Ornstein-Uhlenbeck mean-reverting process
/// `dX = theta (mu - X) dt + sigma dW`.
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    /// `E[X(t)]` given `X(0) = x0`, for weak-convergence checks.
    pub fn mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }
}

impl ItoProcess for OuProcess {
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _t: f64, _x: f64) -> f64 {
        self.sigma
    }

    fn diffusion_derivative(&self, _t: f64, _x: f64, _eps: f64) -> f64 {
        0.0 // Derivative of a constant diffusion w.r.t. x is 0
    }
}
