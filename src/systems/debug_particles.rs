use bevy::prelude::*;

use crate::resources::simulation::ParticleWorld;

/// Système de debug pour vérifier que les particules bougent
pub fn debug_particle_movement(
    time: Res<Time>,
    mut timer: Local<Timer>,
    world: Res<ParticleWorld>,
) {
    // Initialiser le timer
    if timer.duration() == std::time::Duration::ZERO {
        *timer = Timer::from_seconds(5.0, TimerMode::Repeating);
    }

    timer.tick(time.delta());

    if timer.just_finished() {
        let speeds: Vec<f32> = world.particles().iter()
            .map(|p| p.velocity.length())
            .collect();

        if speeds.is_empty() {
            warn!("Aucune particule dans la simulation");
            return;
        }

        let avg_speed = speeds.iter().sum::<f32>() / speeds.len() as f32;
        let max_speed = speeds.iter().copied().fold(0.0_f32, f32::max);
        let moving_count = speeds.iter().filter(|&&v| v > 0.1).count();

        info!("=== Debug Particules ===");
        info!("Particules en mouvement: {}/{}", moving_count, speeds.len());
        info!("Vitesse moyenne: {:.2}", avg_speed);
        info!("Vitesse max: {:.2}", max_speed);
    }
}
