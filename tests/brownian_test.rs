// tests/brownian_test.rs
use sde_paths::brownian::{make_correlated_paths, make_path};
use sde_paths::rng::seed_rng_from_u64;
use sde_paths::SdeError;
use statrs::statistics::Statistics;

#[test]
fn test_grid_invariants_across_ranges() {
    let cases = [
        (0.0, 7.0, 2.0_f64.powi(-10)),
        (0.0, 1.0, 0.25),
        (0.0, 1.1, 0.25),
        (-2.0, 3.5, 0.5),
        (1.0, 1.05, 0.2),
    ];

    for &(start, end, step) in &cases {
        let mut rng = seed_rng_from_u64(1);
        let (times, path) = make_path(start, end, step, &mut rng).expect("valid range");

        assert_eq!(times.len(), path.len());
        assert_eq!(times[0], start);
        assert_eq!(path[0], 0.0);
        assert_eq!(
            *times.last().unwrap(),
            end,
            "grid must land exactly on end for ({}, {}, {})",
            start,
            end,
            step
        );
        for w in times.windows(2) {
            assert!(w[1] > w[0], "times must be strictly increasing");
            assert!(w[1] - w[0] <= step + 1e-12, "spacing must not exceed step");
        }
    }
}

#[test]
fn test_same_seed_same_path() {
    for seed in [0u64, 1, 42, 987654321] {
        let (t1, p1) = make_path(0.0, 2.0, 0.01, &mut seed_rng_from_u64(seed)).unwrap();
        let (t2, p2) = make_path(0.0, 2.0, 0.01, &mut seed_rng_from_u64(seed)).unwrap();
        assert_eq!(t1, t2);
        assert_eq!(p1, p2);

        let (_, _, b1) =
            make_correlated_paths(0.0, 2.0, 0.01, -0.4, &mut seed_rng_from_u64(seed)).unwrap();
        let (_, _, b2) =
            make_correlated_paths(0.0, 2.0, 0.01, -0.4, &mut seed_rng_from_u64(seed)).unwrap();
        assert_eq!(b1, b2);
    }
}

#[test]
fn test_increment_moments() {
    // Increments over equal sub-intervals must look N(0, dt).
    let step = 0.25;
    let mut increments = Vec::new();
    for run in 0..200u64 {
        let mut rng = seed_rng_from_u64(1000 + run);
        let (times, path) = make_path(0.0, 10.0, step, &mut rng).unwrap();
        for i in 1..times.len() {
            increments.push(path[i] - path[i - 1]);
        }
    }

    let mean = increments.iter().mean();
    let variance = increments.iter().variance();
    assert!(mean.abs() < 0.02, "increment mean should be ~0, got {}", mean);
    assert!(
        (variance - step).abs() < 0.02,
        "increment variance should be ~dt = {}, got {}",
        step,
        variance
    );
}

#[test]
fn test_zero_correlation_increments_uncorrelated() {
    let step = 2.0_f64.powi(-6);
    let mut da = Vec::new();
    let mut db = Vec::new();
    for run in 0..200u64 {
        let mut rng = seed_rng_from_u64(run);
        let (times, a, b) = make_correlated_paths(0.0, 1.0, step, 0.0, &mut rng).unwrap();
        for i in 1..times.len() {
            da.push(a[i] - a[i - 1]);
            db.push(b[i] - b[i - 1]);
        }
    }

    let ma = da.iter().mean();
    let mb = db.iter().mean();
    let cov: f64 = da
        .iter()
        .zip(db.iter())
        .map(|(x, y)| (x - ma) * (y - mb))
        .sum::<f64>()
        / (da.len() - 1) as f64;
    let sample_corr = cov / (da.iter().std_dev() * db.iter().std_dev());

    assert!(
        sample_corr.abs() < 0.05,
        "sample correlation should converge to 0, got {}",
        sample_corr
    );
}

#[test]
fn test_nonzero_correlation_recovered() {
    let rho = -0.7;
    let step = 2.0_f64.powi(-6);
    let mut da = Vec::new();
    let mut db = Vec::new();
    for run in 0..200u64 {
        let mut rng = seed_rng_from_u64(run);
        let (times, a, b) = make_correlated_paths(0.0, 1.0, step, rho, &mut rng).unwrap();
        for i in 1..times.len() {
            da.push(a[i] - a[i - 1]);
            db.push(b[i] - b[i - 1]);
        }
    }

    let ma = da.iter().mean();
    let mb = db.iter().mean();
    let cov: f64 = da
        .iter()
        .zip(db.iter())
        .map(|(x, y)| (x - ma) * (y - mb))
        .sum::<f64>()
        / (da.len() - 1) as f64;
    let sample_corr = cov / (da.iter().std_dev() * db.iter().std_dev());

    assert!(
        (sample_corr - rho).abs() < 0.05,
        "sample correlation should be near {}, got {}",
        rho,
        sample_corr
    );
}

#[test]
fn test_perfect_correlation_is_exact_copy() {
    let mut rng = seed_rng_from_u64(9);
    let (_, a, b) = make_correlated_paths(0.0, 3.0, 0.01, 1.0, &mut rng).unwrap();
    // Bitwise equality, not approximate: rho = 1 zeroes the orthogonal term.
    assert_eq!(a, b);
}

#[test]
fn test_error_cases() {
    let mut rng = seed_rng_from_u64(0);
    assert!(matches!(
        make_path(0.0, 1.0, -0.5, &mut rng),
        Err(SdeError::InvalidRange { .. })
    ));
    assert!(matches!(
        make_path(1.0, 1.0, 0.1, &mut rng),
        Err(SdeError::InvalidRange { .. })
    ));
    assert!(matches!(
        make_correlated_paths(0.0, 1.0, 0.1, -1.01, &mut rng),
        Err(SdeError::InvalidParameter { .. })
    ));
}
