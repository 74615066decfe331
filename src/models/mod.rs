// src/models/mod.rs
pub mod gbm;
pub mod model;
pub mod ou_process;

pub use gbm::Gbm;
pub use model::{Coefficients, ItoProcess};
pub use ou_process::OuProcess;
