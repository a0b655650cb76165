// src/brownian.rs
//! Brownian (Wiener-process) sample-path generation
//!
//! # Mathematical Framework
//!
//! A standard Wiener process W_t satisfies:
//! ```text
//! W_0 = 0
//! W_t - W_s ~ N(0, t - s)   for s < t, increments independent
//! ```
//!
//! Paths are discretized on a fixed grid `t_0 = start, t_1 = start + step, ...`
//! that lands exactly on `end`, via a shorter final sub-interval when the
//! span is not a whole number of steps. Each increment is drawn with variance
//! equal to the *actual* elapsed time of its sub-interval, so the shorter
//! final step stays distributionally correct.
//!
//! # Correlated pairs
//!
//! For two drivers with instantaneous correlation ρ, the second path's
//! increment at each step is built from the first's:
//! ```text
//! ΔW_b = ρ·ΔW_a + √(1 − ρ²)·√Δt·Z
//! ```
//! with Z ~ N(0,1) independent of ΔW_a. Both marginals are then standard
//! Wiener processes and Corr(ΔW_a, ΔW_b) = ρ at every step, independent of
//! history.

use crate::error::{validation::*, SdeResult};
use crate::rng;
use rand::Rng;

/// Build the discretization grid for `[start, end]` with spacing `step`.
///
/// The final point is always exactly `end`; when the span is not a whole
/// number of steps the last sub-interval is shorter than `step`.
pub fn time_grid(start: f64, end: f64, step: f64) -> SdeResult<Vec<f64>> {
    validate_grid(start, end, step)?;

    let n_full = ((end - start) / step).floor() as usize;
    let mut times = Vec::with_capacity(n_full + 2);
    for i in 0..=n_full {
        times.push(start + i as f64 * step);
    }

    // Land exactly on `end`. A leftover below the rounding tolerance is
    // float noise from the division above, not a real sub-interval.
    let last = *times.last().unwrap_or(&start);
    if end - last > step * 1e-9 || times.len() == 1 {
        times.push(end);
    } else {
        *times.last_mut().unwrap() = end;
    }

    Ok(times)
}

/// Generate one standard Wiener-process sample path over `[start, end]`.
///
/// Returns the time grid and the path values, aligned index-by-index, with
/// `path[0] == 0.0`.
///
/// # Errors
///
/// `InvalidRange` when `step <= 0` or `end <= start`.
pub fn make_path<R: Rng + ?Sized>(
    start: f64,
    end: f64,
    step: f64,
    rng: &mut R,
) -> SdeResult<(Vec<f64>, Vec<f64>)> {
    let times = time_grid(start, end, step)?;

    let mut path = Vec::with_capacity(times.len());
    path.push(0.0);
    let mut w = 0.0;
    for i in 1..times.len() {
        let dt = times[i] - times[i - 1];
        w += dt.sqrt() * rng::get_normal_draw(rng);
        path.push(w);
    }

    Ok((times, path))
}

/// Generate two Wiener-process sample paths with instantaneous correlation
/// `correlation` over `[start, end]`.
///
/// The paths share one time grid. The first path is drawn exactly as
/// [`make_path`] would; the second combines each of the first's increments
/// with an independent draw as `ΔW_b = ρ·ΔW_a + √(1 − ρ²)·√Δt·Z`. For
/// `correlation == 1.0` the two paths are identical.
///
/// # Errors
///
/// `InvalidRange` for a bad grid, `InvalidParameter` when `correlation` is
/// outside `[-1, 1]`.
pub fn make_correlated_paths<R: Rng + ?Sized>(
    start: f64,
    end: f64,
    step: f64,
    correlation: f64,
    rng: &mut R,
) -> SdeResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    validate_correlation("correlation", correlation)?;
    let times = time_grid(start, end, step)?;

    let orth = (1.0 - correlation * correlation).sqrt();

    let mut path_a = Vec::with_capacity(times.len());
    let mut path_b = Vec::with_capacity(times.len());
    path_a.push(0.0);
    path_b.push(0.0);

    let (mut w_a, mut w_b) = (0.0, 0.0);
    for i in 1..times.len() {
        let dt = times[i] - times[i - 1];
        let sqrt_dt = dt.sqrt();

        let dw_a = sqrt_dt * rng::get_normal_draw(rng);
        let dw_b = correlation * dw_a + orth * sqrt_dt * rng::get_normal_draw(rng);

        w_a += dw_a;
        w_b += dw_b;
        path_a.push(w_a);
        path_b.push(w_b);
    }

    Ok((times, path_a, path_b))
}
