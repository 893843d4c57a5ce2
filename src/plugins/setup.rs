use bevy::prelude::*;

use crate::globals::BACKGROUND_COLOR;
use crate::resources::{
    controls::ControlBar,
    particle_types::ParticlePalette,
    simulation::SimulationSettings,
};

pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        let (r, g, b) = BACKGROUND_COLOR;
        app.insert_resource(ClearColor(Color::srgb_u8(r, g, b)));
        app.init_resource::<SimulationSettings>();
        app.init_resource::<ControlBar>();
        app.init_resource::<ParticlePalette>();
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
