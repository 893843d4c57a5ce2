use bevy::prelude::*;

use crate::components::particle::ParticleSprite;
use crate::resources::{particle_types::ParticlePalette, simulation::ParticleWorld};

/// Mesh et matériaux partagés par toutes les particules
#[derive(Resource)]
pub struct ParticleAssets {
    pub mesh: Handle<Mesh>,
    pub materials: Vec<Handle<ColorMaterial>>,
}

/// Crée le mesh de cercle et un matériau par type
pub fn setup_particle_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    world: Res<ParticleWorld>,
    palette: Res<ParticlePalette>,
) {
    let mesh = meshes.add(Circle::new(world.parameters().particle_radius));
    let materials = palette
        .colors
        .iter()
        .map(|color| materials.add(*color))
        .collect();

    commands.insert_resource(ParticleAssets { mesh, materials });
}

/// Recrée les matériaux quand la palette change (reset avec un autre nombre de types)
pub fn refresh_particle_materials(
    palette: Res<ParticlePalette>,
    mut assets: ResMut<ParticleAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut sprites: Query<&mut ParticleSprite>,
) {
    if !palette.is_changed() || palette.is_added() {
        return;
    }

    assets.materials = palette
        .colors
        .iter()
        .map(|color| materials.add(*color))
        .collect();

    // Force la mise à jour du matériau de chaque sprite
    for mut sprite in sprites.iter_mut() {
        sprite.kind = usize::MAX;
    }
}

/// Fait correspondre une entité par particule et recopie les positions.
///
/// Le monde est en coordonnées d'écran (origine en haut à gauche, y vers le bas),
/// la caméra 2D est centrée avec y vers le haut.
pub fn sync_particle_sprites(
    mut commands: Commands,
    world: Res<ParticleWorld>,
    assets: Res<ParticleAssets>,
    mut sprites: Query<(
        Entity,
        &mut ParticleSprite,
        &mut Transform,
        &mut MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let particles = world.particles();
    let bounds = world.bounds();
    let half = Vec2::new(bounds.width, bounds.height) / 2.0;
    let to_screen = |position: Vec2| Vec3::new(position.x - half.x, half.y - position.y, 0.0);

    let mut present = vec![false; particles.len()];

    for (entity, mut sprite, mut transform, mut material) in sprites.iter_mut() {
        let Some(particle) = particles.get(sprite.index) else {
            commands.entity(entity).despawn();
            continue;
        };

        present[sprite.index] = true;
        transform.translation = to_screen(particle.position);

        if sprite.kind != particle.kind {
            sprite.kind = particle.kind;
            if let Some(handle) = assets.materials.get(particle.kind) {
                material.0 = handle.clone();
            }
        }
    }

    for (index, particle) in particles.iter().enumerate() {
        if present[index] {
            continue;
        }

        let Some(handle) = assets.materials.get(particle.kind) else {
            warn!("Aucun matériau pour le type {}", particle.kind);
            continue;
        };

        commands.spawn((
            ParticleSprite { index, kind: particle.kind },
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(handle.clone()),
            Transform::from_translation(to_screen(particle.position)),
        ));
    }
}
