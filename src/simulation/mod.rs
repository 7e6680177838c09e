// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;
pub mod history;
pub mod query;

pub use framework::Simulation;
pub use history::{History, Sample};
