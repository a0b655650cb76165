// src/models/ou_process.rs
use super::model::SdeModel;

/// Ornstein-Uhlenbeck process: `dX_t = θ(μ - X_t)dt + σ dW_t`.
///
/// Mean-reverting with stationary distribution `N(μ, σ²/2θ)`.
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    /// Standard deviation of the stationary distribution, σ/√(2θ).
    pub fn stationary_std(&self) -> f64 {
        self.sigma / (2.0 * self.theta).sqrt()
    }

    /// Mean of the exact solution at time `t` from `x0`, μ + (x0 − μ)e^(−θt).
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }
}

impl SdeModel for OuProcess {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }
}
