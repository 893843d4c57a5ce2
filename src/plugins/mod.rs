pub mod setup;
pub mod simulation;
pub mod ui;
pub mod visualizer;
