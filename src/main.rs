use bevy::diagnostic::{FrameCount, FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::PresentMode;

use particle_life::globals::{DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};
use particle_life::plugins::{
    setup::SetupPlugin, simulation::SimulationPlugin, ui::UIPlugin, visualizer::VisualizerPlugin,
};

fn main() {
    App::new()
        // Plugins Bevy de base
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Particle life".into(),
                    resolution: (DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT).into(),
                    present_mode: PresentMode::AutoVsync,
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    visible: false,
                    ..default()
                }),
                ..default()
            }),
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
        ))
        .add_plugins((SetupPlugin, SimulationPlugin, VisualizerPlugin, UIPlugin))
        .add_systems(Update, (make_visible, exit_game))
        .run();
}

fn make_visible(mut window: Single<&mut Window>, frames: Res<FrameCount>) {
    if frames.0 == 3 {
        window.visible = true;
    }
}

fn exit_game(keyboard_input: Res<ButtonInput<KeyCode>>, mut app_exit_events: EventWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        app_exit_events.write(AppExit::Success);
    }
}
