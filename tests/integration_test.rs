// tests/integration_test.rs
use sde_paths::models::{HestonParams, OuProcess};
use sde_paths::runner::{run_batch, run_heston_batch, ScenarioConfig};

#[test]
fn test_ou_scenario_stays_in_stationary_envelope() {
    // theta = 0.7, mu = 1.5, sigma = 0.06, x0 = 0, step 2^-10 over [0, 7].
    let ou = OuProcess::new(0.7, 1.5, 0.06);
    let cfg = ScenarioConfig {
        t0: 0.0,
        t1: 7.0,
        step: 2.0_f64.powi(-10),
        runs: 50,
        seed: 42,
    };

    let paths = run_batch(&cfg, &ou, 0.0).expect("valid scenario");
    assert_eq!(paths.len(), 50);

    // The path starts far from mu, so the envelope is centered on the exact
    // transient mean mu + (x0 - mu)e^(-theta t); width is a generous multiple
    // of the stationary standard deviation sigma/sqrt(2 theta).
    let band = 6.0 * ou.stationary_std();
    for (times, approximation) in &paths {
        assert_eq!(times.len(), approximation.len());
        for (t, x) in times.iter().zip(approximation.iter()) {
            let center = ou.exact_mean(0.0, t - times[0]);
            assert!(
                (x - center).abs() < band,
                "path left the envelope at t = {}: x = {}, center = {}",
                t,
                x,
                center
            );
        }
    }

    // Late in the run the process should hover around mu itself.
    for (_, approximation) in &paths {
        let terminal = *approximation.last().unwrap();
        assert!((terminal - 1.5).abs() < band);
    }
}

#[test]
fn test_heston_scenario_finite_variance_positive_stock() {
    // r = 0.1, theta = 0.2, kappa = 3.0, xi = 0.1, v0 = 0.1, s0 = 100,
    // rho = 0, step 2^-10 over [0, 1].
    let params = HestonParams {
        s0: 100.0,
        v0: 0.1,
        r: 0.1,
        kappa: 3.0,
        theta: 0.2,
        xi: 0.1,
        rho: 0.0,
    };
    assert!(params.feller_condition_holds());

    let cfg = ScenarioConfig {
        t0: 0.0,
        t1: 1.0,
        step: 2.0_f64.powi(-10),
        runs: 50,
        seed: 42,
    };

    let runs = run_heston_batch(&cfg, params).expect("valid scenario");
    assert_eq!(runs.len(), 50);

    let mut runs_with_positive_stock = 0;
    for run in &runs {
        assert_eq!(run.times.len(), run.stock.len());
        assert_eq!(run.times.len(), run.variance.len());

        assert!(
            run.variance.iter().all(|v| v.is_finite()),
            "variance path must remain finite"
        );
        if run.stock.iter().all(|s| s.is_finite() && *s > 0.0) {
            runs_with_positive_stock += 1;
        }
    }

    // "Overwhelming majority": with these parameters the Feller condition
    // holds comfortably, so in practice every run qualifies.
    assert!(
        runs_with_positive_stock >= runs.len() - 1,
        "only {}/{} runs kept a positive stock path",
        runs_with_positive_stock,
        runs.len()
    );
}

#[test]
fn test_heston_batch_reproducible_across_calls() {
    let params = HestonParams {
        s0: 100.0,
        v0: 0.1,
        r: 0.1,
        kappa: 3.0,
        theta: 0.2,
        xi: 0.1,
        rho: -0.3,
    };
    let cfg = ScenarioConfig {
        t0: 0.0,
        t1: 1.0,
        step: 2.0_f64.powi(-6),
        runs: 4,
        seed: 7,
    };

    let a = run_heston_batch(&cfg, params).unwrap();
    let b = run_heston_batch(&cfg, params).unwrap();
    for (ra, rb) in a.iter().zip(b.iter()) {
        assert_eq!(ra.times, rb.times);
        assert_eq!(ra.stock, rb.stock);
        assert_eq!(ra.variance, rb.variance);
    }
}

#[test]
fn test_invalid_scenario_rejected() {
    let ou = OuProcess::new(0.7, 1.5, 0.06);
    let cfg = ScenarioConfig {
        t0: 1.0,
        t1: 0.0,
        step: 0.01,
        runs: 5,
        seed: 1,
    };
    assert!(run_batch(&cfg, &ou, 0.0).is_err());
}
