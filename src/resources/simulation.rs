use bevy::prelude::*;

use crate::globals::*;
use crate::simulation::{ParticleSystem, Preset, WorldBounds};

/// Le système de particules possédé par l'application
#[derive(Resource, Deref, DerefMut)]
pub struct ParticleWorld(pub ParticleSystem);

/// Réglages de démarrage de la simulation
#[derive(Resource, Debug, Clone)]
pub struct SimulationSettings {
    pub preset: Preset,
    pub particle_types: usize,
    pub particle_count: usize,
    /// Graine de la session en cours (`None` : dérivée de l'horloge au prochain reset)
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            particle_types: DEFAULT_PARTICLE_TYPES,
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
        }
    }
}

/// Demande de reconstruction complète du système
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetWorld {
    /// `Some` pour rejouer une graine, `None` pour en tirer une nouvelle
    pub seed: Option<u64>,
}

/// Dimensions du monde à partir de la fenêtre (pixels logiques)
pub fn bounds_for_window(window: &Window, control_bar: bool) -> WorldBounds {
    let margin = if control_bar { CONTROL_BAR_WIDTH } else { 0.0 };
    WorldBounds::new(window.width(), window.height(), margin)
}
