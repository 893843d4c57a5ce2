pub const DEFAULT_PARTICLE_COUNT: usize = 200;
pub const DEFAULT_PARTICLE_TYPES: usize = 6;
pub const MAX_PARTICLE_COUNT: u32 = 1000;

// Paramètres du monde
pub const DEFAULT_WORLD_WIDTH: f32 = 1280.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 720.0;
pub const CONTROL_BAR_WIDTH: f32 = 150.0;

// Paramètres des particules
pub const PARTICLE_RADIUS: f32 = 4.0;
pub const DEFAULT_MAX_SPEED: f32 = 7.0;
pub const DEFAULT_FRICTION: f32 = 0.97;
pub const DEFAULT_BOUNCINESS: f32 = 1.0;

// Paramètres des forces
pub const DEFAULT_MAX_INTERACTION_DISTANCE: f32 = 30.0;
pub const MAX_INTERACTION_DISTANCE_LIMIT: u32 = 100;
pub const DEFAULT_MIN_DISTANCE_SQUARED: f32 = 3e-3;
pub const DEFAULT_REPULSION_STRENGTH: f32 = 3.0;
/// Le curseur de répulsion est gradué en vingtièmes
pub const REPULSION_SLIDER_SCALE: f32 = 20.0;

// Paramètres d'apparition
pub const DEFAULT_SPAWN_DISK_FACTOR: f32 = 0.4;
pub const DEFAULT_INITIAL_VELOCITY: (f32, f32) = (-2.0, 2.0);

// Paramètres de rendu
pub const BACKGROUND_COLOR: (u8, u8, u8) = (40, 41, 35);
pub const CONTROL_BAR_COLOR: (u8, u8, u8) = (24, 25, 21);
pub const PALETTE: [(u8, u8, u8); 6] = [
    (172, 128, 255),
    (166, 226, 44),
    (104, 216, 239),
    (253, 150, 33),
    (249, 36, 114),
    (231, 219, 116),
];
