// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! given a pre-generated Wiener path W sampled at `times`, the scheme
//! produces the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt_n + b(X_n, t_n) ΔW_n
//! ```
//!
//! with `Δt_n = t_{n+1} - t_n` and `ΔW_n = W_{n+1} - W_n`. The step widths
//! come from the grid itself, so a shorter final sub-interval is handled
//! with no special casing.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//!
//! # Scheme artifacts
//!
//! Intermediate values are never clamped. A diffusion that takes `√x` of a
//! variance-like state can receive a negative value once the discretized
//! path dips below zero; the resulting NaN propagates to the caller rather
//! than being repaired here.

use crate::error::{validation::validate_same_length, SdeError, SdeResult};
use crate::models::model::{SdeModel, VolCoupledModel};

/// Euler-Maruyama integrator over pre-generated Brownian paths.
///
/// Pure: retains no state between invocations; the only side effect is the
/// allocation of the returned path.
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Integrate `model` along a Brownian path.
    ///
    /// `times` and `path` are the aligned grid and Wiener samples from the
    /// path generator; the result has the same length, with
    /// `result[0] == initial_value`.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` when `times` and `path` differ in length or are
    /// empty.
    pub fn integrate<M: SdeModel>(
        model: &M,
        initial_value: f64,
        times: &[f64],
        path: &[f64],
    ) -> SdeResult<Vec<f64>> {
        Self::check_grid(times, path)?;

        let mut approximation = Vec::with_capacity(times.len());
        approximation.push(initial_value);

        let mut x = initial_value;
        for i in 0..times.len() - 1 {
            let dt = times[i + 1] - times[i];
            let dw = path[i + 1] - path[i];
            x += model.drift(x, times[i]) * dt + model.diffusion(x, times[i]) * dw;
            approximation.push(x);
        }

        Ok(approximation)
    }

    /// Integrate a volatility-coupled `model` along a Brownian path.
    ///
    /// Identical stepping to [`integrate`](Self::integrate), except the
    /// diffusion additionally receives `driving_series[i]` at step `i` —
    /// typically a variance path produced by a separate integration.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` when `times`/`path` disagree, are empty, or
    /// `driving_series` is not aligned with `times`.
    pub fn integrate_stochastic_vol<M: VolCoupledModel>(
        model: &M,
        initial_value: f64,
        times: &[f64],
        path: &[f64],
        driving_series: &[f64],
    ) -> SdeResult<Vec<f64>> {
        Self::check_grid(times, path)?;
        validate_same_length("driving series", times.len(), driving_series.len())?;

        let mut approximation = Vec::with_capacity(times.len());
        approximation.push(initial_value);

        let mut x = initial_value;
        for i in 0..times.len() - 1 {
            let dt = times[i + 1] - times[i];
            let dw = path[i + 1] - path[i];
            x += model.drift(x, times[i]) * dt
                + model.diffusion(x, times[i], driving_series[i]) * dw;
            approximation.push(x);
        }

        Ok(approximation)
    }

    fn check_grid(times: &[f64], path: &[f64]) -> SdeResult<()> {
        if times.is_empty() {
            return Err(SdeError::LengthMismatch {
                what: "time grid".to_string(),
                expected: 1,
                actual: 0,
            });
        }
        validate_same_length("Brownian path", times.len(), path.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SdeModelBuilder;

    #[test]
    fn test_zero_model_is_constant() {
        let model = SdeModelBuilder::new()
            .drift(|_x, _t| 0.0)
            .diffusion(|_x, _t| 0.0)
            .build()
            .unwrap();

        let times = [0.0, 0.5, 1.0, 1.5];
        let path = [0.0, 0.3, -0.1, 0.4];
        let out = EulerMaruyama::integrate(&model, 42.0, &times, &path).unwrap();
        assert_eq!(out, vec![42.0; 4]);
    }

    #[test]
    fn test_constant_drift_is_pure_euler() {
        let a = 2.0;
        let model = SdeModelBuilder::new()
            .drift(move |_x, _t| a)
            .diffusion(|_x, _t| 0.0)
            .build()
            .unwrap();

        let times = [0.0, 0.25, 0.5, 1.0];
        let path = [0.0; 4];
        let out = EulerMaruyama::integrate(&model, 1.0, &times, &path).unwrap();
        for (x, t) in out.iter().zip(times.iter()) {
            assert!((x - (1.0 + a * t)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_grid_rejected() {
        let model = SdeModelBuilder::new()
            .drift(|_x, _t| 0.0)
            .diffusion(|_x, _t| 0.0)
            .build()
            .unwrap();
        assert!(matches!(
            EulerMaruyama::integrate(&model, 0.0, &[], &[]),
            Err(SdeError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_path_length_mismatch_rejected() {
        let model = SdeModelBuilder::new()
            .drift(|_x, _t| 0.0)
            .diffusion(|_x, _t| 0.0)
            .build()
            .unwrap();
        assert!(matches!(
            EulerMaruyama::integrate(&model, 0.0, &[0.0, 1.0], &[0.0]),
            Err(SdeError::LengthMismatch { .. })
        ));
    }
}
