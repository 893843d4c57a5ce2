use bevy::prelude::*;

use crate::plugins::simulation::SimulationSet;
use crate::systems::{
    rendering::{refresh_particle_materials, setup_particle_assets, sync_particle_sprites},
    spawning::spawn_particle_world,
};

pub struct VisualizerPlugin;

impl Plugin for VisualizerPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, setup_particle_assets.after(spawn_particle_world))
            .add_systems(
                Update,
                (refresh_particle_materials, sync_particle_sprites)
                    .chain()
                    .after(SimulationSet),
            );
    }
}
