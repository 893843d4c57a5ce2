pub mod matrix;
pub mod params;
pub mod particle;
pub mod preset;
pub mod system;

pub use matrix::InteractionMatrix;
pub use params::{SimulationParameters, SpawnSettings, WorldBounds};
pub use particle::Particle;
pub use preset::{Preset, PresetConfig};
pub use system::ParticleSystem;
