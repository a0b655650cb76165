// src/models/custom.rs
//! Closure-backed models for ad-hoc experiments.
//!
//! The named variants ([`OuProcess`](super::ou_process::OuProcess) and
//! friends) are preferred for anything long-lived; these builders exist for
//! the "pair two formulas with some constants and integrate" workflow.
//! Binding is checked eagerly: `build()` fails with `UnboundModel` when a
//! slot was never set, so an integrator never sees a half-assembled model.

use super::model::{SdeModel, VolCoupledModel};
use crate::error::{SdeError, SdeResult};

type DriftFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;
type DiffusionFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;
type CoupledDiffusionFn = Box<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>;

/// An [`SdeModel`] assembled from two closures.
pub struct CustomModel {
    drift: DriftFn,
    diffusion: DiffusionFn,
}

impl std::fmt::Debug for CustomModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomModel").finish_non_exhaustive()
    }
}

impl SdeModel for CustomModel {
    fn drift(&self, x: f64, t: f64) -> f64 {
        (self.drift)(x, t)
    }

    fn diffusion(&self, x: f64, t: f64) -> f64 {
        (self.diffusion)(x, t)
    }
}

/// Builder for [`CustomModel`].
#[derive(Default)]
pub struct SdeModelBuilder {
    drift: Option<DriftFn>,
    diffusion: Option<DiffusionFn>,
}

impl SdeModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drift<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.drift = Some(Box::new(f));
        self
    }

    pub fn diffusion<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.diffusion = Some(Box::new(f));
        self
    }

    /// # Errors
    ///
    /// `UnboundModel` naming the first missing slot.
    pub fn build(self) -> SdeResult<CustomModel> {
        let drift = self.drift.ok_or_else(|| SdeError::UnboundModel {
            slot: "drift".to_string(),
        })?;
        let diffusion = self.diffusion.ok_or_else(|| SdeError::UnboundModel {
            slot: "diffusion".to_string(),
        })?;
        Ok(CustomModel { drift, diffusion })
    }
}

/// A [`VolCoupledModel`] assembled from two closures; the diffusion closure
/// receives the concurrent driving value as its third argument.
pub struct CustomCoupledModel {
    drift: DriftFn,
    diffusion: CoupledDiffusionFn,
}

impl std::fmt::Debug for CustomCoupledModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomCoupledModel").finish_non_exhaustive()
    }
}

impl VolCoupledModel for CustomCoupledModel {
    fn drift(&self, x: f64, t: f64) -> f64 {
        (self.drift)(x, t)
    }

    fn diffusion(&self, x: f64, t: f64, vol: f64) -> f64 {
        (self.diffusion)(x, t, vol)
    }
}

/// Builder for [`CustomCoupledModel`].
#[derive(Default)]
pub struct CoupledSdeModelBuilder {
    drift: Option<DriftFn>,
    diffusion: Option<CoupledDiffusionFn>,
}

impl CoupledSdeModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drift<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.drift = Some(Box::new(f));
        self
    }

    pub fn diffusion<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.diffusion = Some(Box::new(f));
        self
    }

    /// # Errors
    ///
    /// `UnboundModel` naming the first missing slot.
    pub fn build(self) -> SdeResult<CustomCoupledModel> {
        let drift = self.drift.ok_or_else(|| SdeError::UnboundModel {
            slot: "drift".to_string(),
        })?;
        let diffusion = self.diffusion.ok_or_else(|| SdeError::UnboundModel {
            slot: "diffusion".to_string(),
        })?;
        Ok(CustomCoupledModel { drift, diffusion })
    }
}
