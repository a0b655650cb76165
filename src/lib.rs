//! # sde-paths: Euler-Maruyama simulation of SDE sample paths
//!
//! A Rust library for approximating sample paths of stochastic differential
//! equations by the Euler-Maruyama discretization scheme, including the
//! coupled stock/variance pair of the Heston stochastic-volatility model.
//!
//! ## Key Pieces
//!
//! - **Brownian drivers**: single and correlated Wiener-process paths on a
//!   fixed grid, with pluggable seeded randomness
//! - **Model contract**: [`models::SdeModel`] (drift + diffusion) and
//!   [`models::VolCoupledModel`] (diffusion driven by an external series)
//! - **Integrator**: [`solvers::EulerMaruyama`], plain and
//!   volatility-coupled, pure over pre-generated paths
//! - **Named models**: Ornstein-Uhlenbeck, geometric Brownian motion, and
//!   the Heston stock/variance pair
//! - **Scenario runner**: independent repeated runs across the rayon pool
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_paths::brownian;
//! use sde_paths::models::OuProcess;
//! use sde_paths::rng::seed_rng_from_u64;
//! use sde_paths::solvers::EulerMaruyama;
//!
//! let model = OuProcess::new(0.7, 1.5, 0.06);
//! let mut rng = seed_rng_from_u64(42);
//!
//! let (times, path) = brownian::make_path(0.0, 7.0, 2.0_f64.powi(-10), &mut rng)
//!     .expect("valid interval");
//! let approximation = EulerMaruyama::integrate(&model, 0.0, &times, &path)
//!     .expect("aligned inputs");
//! assert_eq!(approximation.len(), times.len());
//! ```
//!
//! ## Mathematical Foundation
//!
//! For `dX_t = α(X_t,t)dt + β(X_t,t)dW_t`, the Euler-Maruyama update
//! `X_{n+1} = X_n + α(X_n,t_n)Δt_n + β(X_n,t_n)ΔW_n` converges with strong
//! order 0.5 and weak order 1.0 in the step size. The Heston pair is handled
//! by integrating the variance process first and feeding its path into the
//! stock process's diffusion.

// Module declarations
pub mod brownian;
pub mod error;
pub mod models;
pub mod output;
pub mod rng;
pub mod runner;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
