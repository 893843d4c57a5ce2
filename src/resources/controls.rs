use bevy::prelude::*;

use crate::globals::*;
use crate::simulation::{PresetConfig, SimulationParameters};

/// Valeurs des curseurs de la barre de contrôle, dans leurs unités d'affichage
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlBar {
    pub visible: bool,
    /// Nombre de particules demandé
    pub particle_count: u32,
    /// (1 - friction) * 1000
    pub friction_permille: u32,
    pub max_distance: u32,
    /// répulsion * 20
    pub repulsion: u32,
}

impl Default for ControlBar {
    fn default() -> Self {
        Self::from_parameters(&SimulationParameters::default(), DEFAULT_PARTICLE_COUNT, true)
    }
}

impl ControlBar {
    pub fn from_parameters(params: &SimulationParameters, particle_count: usize, visible: bool) -> Self {
        Self {
            visible,
            particle_count: (particle_count as u32).min(MAX_PARTICLE_COUNT),
            friction_permille: ((1.0 - params.friction) * 1000.0).round().clamp(0.0, 1000.0) as u32,
            max_distance: (params.max_interaction_distance.round() as u32).min(MAX_INTERACTION_DISTANCE_LIMIT),
            repulsion: (params.repulsion_strength * REPULSION_SLIDER_SCALE)
                .round()
                .clamp(0.0, 100.0) as u32,
        }
    }

    pub fn from_preset(config: &PresetConfig, particle_count: usize) -> Self {
        Self::from_parameters(&config.parameters, particle_count, config.control_bar)
    }

    /// Ramène chaque curseur dans sa plage
    pub fn clamp(&mut self) {
        self.particle_count = self.particle_count.min(MAX_PARTICLE_COUNT);
        self.friction_permille = self.friction_permille.min(1000);
        self.max_distance = self.max_distance.min(MAX_INTERACTION_DISTANCE_LIMIT);
        self.repulsion = self.repulsion.min(100);
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count.min(MAX_PARTICLE_COUNT) as usize
    }

    /// Applique les curseurs sur les paramètres courants, le reste est conservé
    pub fn apply_to(&self, base: SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            friction: 1.0 - self.friction_permille.min(1000) as f32 / 1000.0,
            max_interaction_distance: self.max_distance.min(MAX_INTERACTION_DISTANCE_LIMIT) as f32,
            repulsion_strength: self.repulsion.min(100) as f32 / REPULSION_SLIDER_SCALE,
            ..base
        }
    }
}
