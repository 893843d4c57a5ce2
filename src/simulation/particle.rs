use bevy::math::Vec2;

/// Une particule : position, vitesse et type (index dans la matrice d'interaction)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub kind: usize,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, kind: usize) -> Self {
        Self { position, velocity, kind }
    }

    /// Particule immobile, utile pour construire des scénarios contrôlés
    pub fn at_rest(x: f32, y: f32, kind: usize) -> Self {
        Self::new(Vec2::new(x, y), Vec2::ZERO, kind)
    }
}
