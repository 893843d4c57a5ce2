use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::globals::CONTROL_BAR_WIDTH;
use crate::resources::{
    controls::ControlBar,
    particle_types::ParticlePalette,
    simulation::{ParticleWorld, ResetWorld, SimulationSettings, bounds_for_window},
};
use crate::simulation::{ParticleSystem, WorldBounds, system::time_seed};

/// Construit le système de particules au démarrage
pub fn spawn_particle_world(
    mut commands: Commands,
    mut settings: ResMut<SimulationSettings>,
    window: Option<Single<&Window>>,
) {
    let config = settings.preset.config();
    let bounds = window
        .map(|window| bounds_for_window(&window, config.control_bar))
        .filter(|bounds| bounds.can_hold(config.parameters.particle_radius))
        .unwrap_or_default();

    let seed = settings.seed.unwrap_or_else(time_seed);
    settings.seed = Some(seed);

    let system = build_system(&settings, seed, bounds);
    info!(
        "🌱 Simulation initialisée : {} particules, {} types, graine {}",
        system.len(),
        system.type_count(),
        seed
    );

    commands.insert_resource(ControlBar::from_preset(&config, settings.particle_count));
    commands.insert_resource(ParticlePalette::new(system.type_count()));
    commands.insert_resource(ParticleWorld(system));
}

/// Reconstruit entièrement le système (nouvelle matrice, nouvelles particules)
pub fn reset_particle_world(
    mut events: EventReader<ResetWorld>,
    mut settings: ResMut<SimulationSettings>,
    mut world: ResMut<ParticleWorld>,
    mut control_bar: ResMut<ControlBar>,
    mut palette: ResMut<ParticlePalette>,
) {
    // Seule la dernière demande de l'image compte
    let Some(request) = events.read().last().copied() else {
        return;
    };

    let config = settings.preset.config();
    let seed = request.seed.unwrap_or_else(time_seed);
    settings.seed = Some(seed);

    settings.particle_count = control_bar.particle_count();

    let mut bounds = *world.bounds();
    bounds.left_margin = if config.control_bar { CONTROL_BAR_WIDTH } else { 0.0 };
    if !bounds.can_hold(config.parameters.particle_radius) {
        bounds = *world.bounds();
    }

    world.0 = build_system(&settings, seed, bounds);
    *control_bar = ControlBar::from_preset(&config, settings.particle_count);
    *palette = ParticlePalette::new(world.type_count());

    info!(
        "🔄 Simulation réinitialisée ({}) avec la graine {}",
        settings.preset.label(),
        seed
    );
}

fn build_system(settings: &SimulationSettings, seed: u64, bounds: WorldBounds) -> ParticleSystem {
    let config = settings.preset.config();

    ParticleSystem::new(
        settings.particle_count,
        settings.particle_types,
        config.parameters,
        config.spawn,
        bounds,
        StdRng::seed_from_u64(seed),
    )
}
