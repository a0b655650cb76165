// src/runner.rs
//! Repeated-run scenario driver.
//!
//! A scenario is a time interval, a step size, and a number of independent
//! runs. Runs never share state, so they execute across the rayon pool, one
//! [`RngFactory`] stream per run — results are identical whatever the thread
//! count.

use crate::brownian;
use crate::error::{validation::*, SdeResult};
use crate::models::heston::{HestonParams, HestonStock, HestonVariance};
use crate::models::model::SdeModel;
use crate::rng::RngFactory;
use crate::solvers::EulerMaruyama;
use rayon::prelude::*;

/// Interval, discretization and repetition count for a batch of runs.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioConfig {
    pub t0: f64,
    pub t1: f64,
    pub step: f64,
    pub runs: usize,
    pub seed: u64,
}

impl ScenarioConfig {
    pub fn validate(&self) -> SdeResult<()> {
        validate_grid(self.t0, self.t1, self.step)?;
        validate_positive("runs", self.runs as f64)?;
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            t0: 0.0,
            t1: 1.0,
            step: (2.0_f64).powi(-10),
            runs: 10,
            seed: 12345,
        }
    }
}

/// One simulated path: the grid and the approximation, aligned.
pub type SimulatedPath = (Vec<f64>, Vec<f64>);

/// Result of one Heston run: the shared grid, the stock path, and the
/// variance path that drove it.
#[derive(Clone, Debug)]
pub struct HestonRun {
    pub times: Vec<f64>,
    pub stock: Vec<f64>,
    pub variance: Vec<f64>,
}

/// Run `cfg.runs` independent single-process simulations in parallel.
///
/// Each run draws a fresh Brownian path and integrates `model` from
/// `initial_value` along it.
pub fn run_batch<M: SdeModel + Sync>(
    cfg: &ScenarioConfig,
    model: &M,
    initial_value: f64,
) -> SdeResult<Vec<SimulatedPath>> {
    cfg.validate()?;
    let factory = RngFactory::new(cfg.seed);

    (0..cfg.runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = factory.create_rng(run as u64);
            let (times, path) = brownian::make_path(cfg.t0, cfg.t1, cfg.step, &mut rng)?;
            let approximation = EulerMaruyama::integrate(model, initial_value, &times, &path)?;
            Ok((times, approximation))
        })
        .collect()
}

/// Run `cfg.runs` independent Heston stock/variance simulations in parallel.
///
/// Per run: draw a correlated Brownian pair, integrate the variance process
/// along the second path, then integrate the stock process along the first
/// path with the variance approximation as driving series. This is the full
/// composition; neither integration knows about the other's model.
pub fn run_heston_batch(cfg: &ScenarioConfig, params: HestonParams) -> SdeResult<Vec<HestonRun>> {
    cfg.validate()?;
    params.validate()?;

    let stock = HestonStock::new(params.r);
    let variance = HestonVariance::new(params.kappa, params.theta, params.xi);
    let factory = RngFactory::new(cfg.seed);

    (0..cfg.runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = factory.create_rng(run as u64);
            let (times, stock_driver, variance_driver) =
                brownian::make_correlated_paths(cfg.t0, cfg.t1, cfg.step, params.rho, &mut rng)?;

            let variance_path =
                EulerMaruyama::integrate(&variance, params.v0, &times, &variance_driver)?;
            let stock_path = EulerMaruyama::integrate_stochastic_vol(
                &stock,
                params.s0,
                &times,
                &stock_driver,
                &variance_path,
            )?;

            Ok(HestonRun {
                times,
                stock: stock_path,
                variance: variance_path,
            })
        })
        .collect()
}
