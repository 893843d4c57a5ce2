use bevy::prelude::*;

/// Entité de rendu associée à la particule d'index `index`
#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleSprite {
    pub index: usize,
    /// Type actuellement affiché (pour changer de matériau si besoin)
    pub kind: usize,
}
