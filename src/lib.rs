// src/lib.rs

//! Lotka-Volterra 捕食者-被食者モデルの前進Euler法によるシミュレーション

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{InitialPopulations, ManualOverride, Parameters, RunConfig};
pub use math::{ConfigError, SimulationError, POPULATION_FLOOR};
pub use models::conserved_quantity;
pub use simulation::{History, Sample, Simulation};
