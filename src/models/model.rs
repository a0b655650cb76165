// src/models/model.rs

/// Drift/diffusion contract for a scalar SDE `dX_t = α(X_t,t)dt + β(X_t,t)dW_t`.
pub trait SdeModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;
}

/// Contract for a process whose diffusion is driven by an externally
/// integrated series (e.g. a stock price driven by a variance path).
///
/// `vol` is the concurrent value of the driving series at the step being
/// taken; the model never sees the series as a whole.
pub trait VolCoupledModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64, vol: f64) -> f64;
}
