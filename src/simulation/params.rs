use bevy::math::Vec2;

use crate::globals::*;

/// Paramètres lus à chaque pas de simulation, modifiables entre deux pas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Facteur multiplicatif appliqué à la vitesse à chaque pas, dans (0, 1]
    pub friction: f32,
    /// Multiplicateur de la vitesse réfléchie sur un mur
    pub bounciness: f32,
    /// Au-delà de cette distance, deux particules ne s'influencent pas
    pub max_interaction_distance: f32,
    /// Plancher de la distance au carré, évite les singularités
    pub min_distance_squared: f32,
    /// Vitesse maximale par axe
    pub max_speed: f32,
    /// Intensité de la répulsion à courte portée
    pub repulsion_strength: f32,
    pub particle_radius: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            bounciness: DEFAULT_BOUNCINESS,
            max_interaction_distance: DEFAULT_MAX_INTERACTION_DISTANCE,
            min_distance_squared: DEFAULT_MIN_DISTANCE_SQUARED,
            max_speed: DEFAULT_MAX_SPEED,
            repulsion_strength: DEFAULT_REPULSION_STRENGTH,
            particle_radius: PARTICLE_RADIUS,
        }
    }
}

/// Règles de création des nouvelles particules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSettings {
    /// Rayon du disque d'apparition, en fraction de min(largeur, hauteur)
    pub disk_radius_factor: f32,
    /// Intervalle [min, max) de chaque composante de la vitesse initiale
    pub initial_velocity: (f32, f32),
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            disk_radius_factor: DEFAULT_SPAWN_DISK_FACTOR,
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
        }
    }
}

/// Dimensions du monde (en pixels logiques, y vers le bas).
/// `left_margin` est la largeur réservée à la barre de contrôle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub left_margin: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            left_margin: CONTROL_BAR_WIDTH,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32, left_margin: f32) -> Self {
        Self { width, height, left_margin }
    }

    pub fn min_x(&self, radius: f32) -> f32 {
        radius + self.left_margin
    }

    pub fn max_x(&self, radius: f32) -> f32 {
        self.width - radius
    }

    pub fn min_y(&self, radius: f32) -> f32 {
        radius
    }

    pub fn max_y(&self, radius: f32) -> f32 {
        self.height - radius
    }

    /// Centre de la zone visible (hors barre de contrôle)
    pub fn spawn_center(&self) -> Vec2 {
        Vec2::new((self.left_margin + self.width) / 2.0, self.height / 2.0)
    }

    /// Vrai si une particule de rayon `radius` tient entre les murs
    /// (faux pour une fenêtre minimisée ou plus étroite que la barre de contrôle)
    pub fn can_hold(&self, radius: f32) -> bool {
        self.min_x(radius) < self.max_x(radius) && self.min_y(radius) < self.max_y(radius)
    }

    pub fn contains(&self, position: Vec2, radius: f32) -> bool {
        position.x >= self.min_x(radius)
            && position.x <= self.max_x(radius)
            && position.y >= self.min_y(radius)
            && position.y <= self.max_y(radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_bounds_cannot_hold_a_particle() {
        assert!(WorldBounds::new(1280.0, 720.0, 150.0).can_hold(PARTICLE_RADIUS));
        assert!(!WorldBounds::new(0.0, 0.0, 150.0).can_hold(PARTICLE_RADIUS));
        assert!(!WorldBounds::new(0.0, 0.0, 0.0).can_hold(PARTICLE_RADIUS));
        assert!(!WorldBounds::new(158.0, 720.0, 150.0).can_hold(PARTICLE_RADIUS));
        assert!(WorldBounds::new(159.0, 720.0, 150.0).can_hold(PARTICLE_RADIUS));
    }
}
