// src/models/mod.rs

pub mod invariant;
pub mod population;

pub use invariant::conserved_quantity;
pub use population::{EquilibriumScale, PopulationState};
