// src/models/heston.rs
//! Heston Stochastic Volatility Model
//!
//! # Mathematical Framework
//!
//! The Heston model pairs a CIR-type variance process with a driven stock
//! price process:
//! ```text
//! dS_t = r S_t dt + √V_t S_t dW_t^(1)
//! dV_t = κ(θ - V_t) dt + ξ√V_t dW_t^(2)
//! ```
//!
//! Where:
//! - S_t: Asset price
//! - V_t: Instantaneous variance
//! - κ: Mean reversion speed for variance
//! - θ: Long-term variance level
//! - ξ: Volatility of variance (vol-of-vol)
//! - ρ: Correlation between dW_t^(1) and dW_t^(2)
//!
//! The two halves are deliberately decoupled: [`HestonVariance`] is an
//! ordinary [`SdeModel`] integrated on its own, and [`HestonStock`] is
//! a [`VolCoupledModel`] that consumes the resulting variance path as its
//! driving series. Neither model knows about the other's internals.
//!
//! # Negative discretized variance
//!
//! Euler-Maruyama can take the variance path negative even though the
//! continuous CIR process stays non-negative. The variance model's own
//! square root is guarded with `max(v, 0)`; the stock diffusion's `√v` is
//! not, so a negative driving value surfaces as NaN in the stock path
//! rather than being silently repaired. [`VarianceScheme`] selects an
//! optional truncation or reflection treatment for the variance dynamics.

use super::model::{SdeModel, VolCoupledModel};
use crate::error::{validation::*, SdeResult};

/// Treatment of a negative discretized variance when evaluating the
/// variance dynamics.
///
/// The integrator never clamps the variance path itself under any scheme;
/// these only change the value the drift/diffusion see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VarianceScheme {
    /// Evaluate drift at the raw value; clamp only under the square root.
    #[default]
    Plain,
    /// Evaluate both drift and diffusion at `max(v, 0)`.
    FullTruncation,
    /// Evaluate both drift and diffusion at `|v|`.
    Reflection,
}

#[derive(Clone, Copy, Debug)]
pub struct HestonParams {
    pub s0: f64,    // Initial stock price
    pub v0: f64,    // Initial variance
    pub r: f64,     // Risk-free rate
    pub kappa: f64, // Mean reversion speed
    pub theta: f64, // Long-term variance
    pub xi: f64,    // Volatility of variance (vol-of-vol)
    pub rho: f64,   // Correlation between stock and variance drivers
}

impl HestonParams {
    pub fn validate(&self) -> SdeResult<()> {
        validate_positive("s0", self.s0)?;
        validate_non_negative("v0", self.v0)?;
        validate_finite("r", self.r)?;
        validate_positive("kappa", self.kappa)?;
        validate_positive("theta", self.theta)?;
        validate_positive("xi", self.xi)?;
        validate_correlation("rho", self.rho)?;
        Ok(())
    }

    /// Whether `2κθ > ξ²` holds. When it does not, the continuous variance
    /// process can reach zero and the discretized one will dip negative
    /// more often.
    pub fn feller_condition_holds(&self) -> bool {
        2.0 * self.kappa * self.theta > self.xi * self.xi
    }
}

/// The CIR variance half of the Heston model:
/// `dV_t = κ(θ - V_t)dt + ξ√V_t dW_t`.
pub struct HestonVariance {
    pub kappa: f64,
    pub theta: f64,
    pub xi: f64,
    pub scheme: VarianceScheme,
}

impl HestonVariance {
    pub fn new(kappa: f64, theta: f64, xi: f64) -> Self {
        Self::with_scheme(kappa, theta, xi, VarianceScheme::Plain)
    }

    pub fn with_scheme(kappa: f64, theta: f64, xi: f64, scheme: VarianceScheme) -> Self {
        HestonVariance {
            kappa,
            theta,
            xi,
            scheme,
        }
    }

    fn effective(&self, v: f64) -> f64 {
        match self.scheme {
            VarianceScheme::Plain => v,
            VarianceScheme::FullTruncation => v.max(0.0),
            VarianceScheme::Reflection => v.abs(),
        }
    }
}

impl SdeModel for HestonVariance {
    fn drift(&self, v: f64, _t: f64) -> f64 {
        self.kappa * (self.theta - self.effective(v))
    }

    fn diffusion(&self, v: f64, _t: f64) -> f64 {
        // Plain scheme still needs the clamp here: sqrt of a negative
        // excursion would poison the whole remaining path.
        self.xi * self.effective(v).max(0.0).sqrt()
    }
}

/// The stock half of the Heston model, driven by an external variance path:
/// `dS_t = r S_t dt + √v S_t dW_t` with `v` supplied per step.
pub struct HestonStock {
    pub r: f64,
}

impl HestonStock {
    pub fn new(r: f64) -> Self {
        HestonStock { r }
    }
}

impl VolCoupledModel for HestonStock {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.r * s
    }

    fn diffusion(&self, s: f64, _t: f64, vol: f64) -> f64 {
        // Unguarded: a negative driving variance yields NaN, which is the
        // scheme artifact surfacing, not a condition to repair here.
        vol.sqrt() * s
    }
}

/// Build the stock/variance model pair for a Heston scenario.
///
/// Returns `(stock, variance)`. Integrate the variance model first, then
/// feed its path to the stock integration as the driving series.
///
/// # Errors
///
/// `InvalidParameter` when any parameter is outside its domain (see
/// [`HestonParams::validate`]).
pub fn heston_model(params: HestonParams) -> SdeResult<(HestonStock, HestonVariance)> {
    params.validate()?;
    Ok((
        HestonStock::new(params.r),
        HestonVariance::new(params.kappa, params.theta, params.xi),
    ))
}
