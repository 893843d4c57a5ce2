pub mod debug_particles;
pub mod movement;
pub mod rendering;
pub mod spawning;
