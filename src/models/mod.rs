// src/models/mod.rs
pub mod custom;
pub mod gbm;
pub mod heston;
pub mod model;
pub mod ou_process;

pub use custom::{CoupledSdeModelBuilder, SdeModelBuilder};
pub use gbm::Gbm;
pub use heston::{heston_model, HestonParams, HestonStock, HestonVariance, VarianceScheme};
pub use model::{SdeModel, VolCoupledModel};
pub use ou_process::OuProcess;
