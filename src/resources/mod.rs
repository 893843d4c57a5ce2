pub mod controls;
pub mod particle_types;
pub mod simulation;
