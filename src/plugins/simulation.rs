use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::resources::{controls::ControlBar, simulation::ResetWorld};
use crate::states::simulation::SimulationState;
use crate::systems::{
    debug_particles::debug_particle_movement,
    movement::{apply_control_bar, step_simulation, sync_world_bounds},
    spawning::{reset_particle_world, spawn_particle_world},
};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // État de la simulation
            .init_state::<SimulationState>()
            .add_event::<ResetWorld>()

            .add_systems(Startup, spawn_particle_world)

            // Les demandes de l'UI de l'image précédente sont appliquées avant le pas
            .add_systems(
                Update,
                (
                    reset_particle_world,
                    sync_world_bounds,
                    apply_control_bar,
                    step_simulation.run_if(in_state(SimulationState::Running)),
                )
                    .chain()
                    .in_set(SimulationSet),
            )
            .add_systems(
                Update,
                (handle_pause_input, toggle_control_bar, debug_particle_movement),
            );
    }
}

/// Pas de simulation, ordonné avant le rendu
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Vrai quand un widget egui a le focus clavier (champ de saisie, curseur)
pub fn keyboard_captured(ctx: Option<&egui::Context>) -> bool {
    ctx.is_some_and(|ctx| ctx.wants_keyboard_input())
}

/// Gestion de la pause (touche Espace)
fn handle_pause_input(
    mut contexts: EguiContexts,
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<SimulationState>>,
    mut next_state: ResMut<NextState<SimulationState>>,
) {
    if keyboard_captured(contexts.try_ctx_mut().map(|ctx| &*ctx)) {
        return;
    }

    if keyboard.just_pressed(KeyCode::Space) {
        match state.get() {
            SimulationState::Running => {
                info!("Simulation en pause");
                next_state.set(SimulationState::Paused);
            }
            SimulationState::Paused => {
                info!("Reprise de la simulation");
                next_state.set(SimulationState::Running);
            }
        }
    }
}

/// Affiche ou masque la barre de contrôle (touche H ; Tab est réservé à egui)
fn toggle_control_bar(
    mut contexts: EguiContexts,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut control_bar: ResMut<ControlBar>,
) {
    if keyboard_captured(contexts.try_ctx_mut().map(|ctx| &*ctx)) {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        control_bar.visible = !control_bar.visible;
        info!("Barre de contrôle {}", if control_bar.visible { "affichée" } else { "masquée" });
    }
}
