// src/models/gbm.rs
use super::model::SdeModel;

/// Geometric Brownian motion: `dS_t = μ S_t dt + σ S_t dW_t`.
///
/// Kept as the reference model for convergence checks since the exact
/// solution is available in closed form.
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Exact lognormal step, `S_{t+Δt} = S_t·exp((μ − σ²/2)Δt + σ·ΔW)`.
    pub fn exact_step(&self, s_t: f64, dt: f64, dw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dw).exp()
    }
}

impl SdeModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }
}
