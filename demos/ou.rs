// demos/ou.rs
//
// Ornstein-Uhlenbeck scenario: ten independent runs of
// dX_t = 0.7(1.5 - X_t)dt + 0.06 dW_t, step 2^-10 over [0, 7], starting at 0.
// Writes all runs to ou_paths.csv for external plotting.

use sde_paths::models::OuProcess;
use sde_paths::output;
use sde_paths::runner::{run_batch, ScenarioConfig};

fn main() {
    let model = OuProcess::new(0.7, 1.5, 0.06);
    let cfg = ScenarioConfig {
        t0: 0.0,
        t1: 7.0,
        step: 2.0_f64.powi(-10),
        runs: 10,
        seed: 42,
    };

    let paths = run_batch(&cfg, &model, 0.0).expect("valid scenario");

    println!(
        "OU process: theta = {}, mu = {}, sigma = {} ({} runs, {} points each)",
        model.theta,
        model.mu,
        model.sigma,
        paths.len(),
        paths[0].0.len()
    );
    for (i, (_, approximation)) in paths.iter().enumerate() {
        println!("run {}: terminal value = {:.6}", i, approximation.last().unwrap());
    }

    let times = &paths[0].0;
    let values: Vec<Vec<f64>> = paths.iter().map(|(_, p)| p.clone()).collect();
    output::write_paths_to_csv("ou_paths.csv", times, &values).expect("could not write CSV");
    println!("Paths written to ou_paths.csv");
}
