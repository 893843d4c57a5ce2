use bevy::prelude::*;

use crate::resources::{
    controls::ControlBar,
    simulation::{ParticleWorld, bounds_for_window},
};

/// Suit la taille de la fenêtre et la visibilité de la barre de contrôle
pub fn sync_world_bounds(
    window: Single<&Window>,
    control_bar: Res<ControlBar>,
    mut world: ResMut<ParticleWorld>,
) {
    let bounds = bounds_for_window(&window, control_bar.visible);

    if *world.bounds() == bounds {
        return;
    }

    // Fenêtre minimisée ou trop étroite : on garde les anciennes dimensions
    if !world.set_bounds(bounds) {
        debug!(
            "Dimensions ignorées : {:.0}x{:.0} (marge {:.0}) ne contient aucune particule",
            bounds.width, bounds.height, bounds.left_margin
        );
        return;
    }

    debug!(
        "Monde redimensionné : {:.0}x{:.0} (marge {:.0})",
        bounds.width, bounds.height, bounds.left_margin
    );
}

/// Transmet les valeurs des curseurs avant le pas de simulation
pub fn apply_control_bar(control_bar: Res<ControlBar>, mut world: ResMut<ParticleWorld>) {
    let target = control_bar.particle_count();
    if world.len() != target {
        world.resize(target);
    }

    let params = control_bar.apply_to(*world.parameters());
    if params != *world.parameters() {
        world.set_parameters(params);
    }
}

/// Un pas de simulation par image
pub fn step_simulation(mut world: ResMut<ParticleWorld>) {
    world.step();
}
