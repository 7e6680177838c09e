// src/math/mod.rs

pub mod integrator;
pub mod error;

pub use integrator::{clamp_to_floor, forward_euler, step_count, step_index, POPULATION_FLOOR};
pub use error::{ConfigError, SimulationError};
