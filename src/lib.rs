pub mod components;
pub mod globals;
pub mod plugins;
pub mod resources;
pub mod simulation;
pub mod states;
pub mod systems;
pub mod ui;

pub use simulation::{
    InteractionMatrix, Particle, ParticleSystem, Preset, PresetConfig, SimulationParameters,
    SpawnSettings, WorldBounds,
};
