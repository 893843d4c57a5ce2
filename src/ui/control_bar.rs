use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::globals::*;
use crate::resources::{
    controls::ControlBar,
    simulation::{ParticleWorld, ResetWorld, SimulationSettings},
};
use crate::simulation::Preset;
use crate::states::simulation::SimulationState;
use crate::ui::force_matrix::ForceMatrixUI;

/// Barre de contrôle à gauche : curseurs, variante et graine
pub fn control_bar_ui(
    mut contexts: EguiContexts,
    mut control_bar: ResMut<ControlBar>,
    mut settings: ResMut<SimulationSettings>,
    mut matrix_ui: ResMut<ForceMatrixUI>,
    state: Res<State<SimulationState>>,
    world: Res<ParticleWorld>,
    mut reset_events: EventWriter<ResetWorld>,
) {
    if !control_bar.visible {
        return;
    }

    let ctx = contexts.ctx_mut();
    let (r, g, b) = CONTROL_BAR_COLOR;
    let frame = egui::Frame::side_top_panel(&ctx.style()).fill(egui::Color32::from_rgb(r, g, b));

    // Copie locale pour ne signaler un changement que si un curseur a bougé
    let mut bar = control_bar.clone();
    let mut preset = settings.preset;

    egui::SidePanel::left("control_bar")
        .exact_width(CONTROL_BAR_WIDTH)
        .resizable(false)
        .frame(frame)
        .show(ctx, |ui| {
            ui.spacing_mut().slider_width = CONTROL_BAR_WIDTH * 0.6;

            ui.label("Particules");
            ui.add(egui::Slider::new(&mut bar.particle_count, 0..=MAX_PARTICLE_COUNT));

            ui.label("Friction (‰)");
            ui.add(egui::Slider::new(&mut bar.friction_permille, 0..=1000));

            ui.label("Distance max");
            ui.add(egui::Slider::new(&mut bar.max_distance, 0..=MAX_INTERACTION_DISTANCE_LIMIT));

            ui.label("Répulsion (×20)");
            ui.add(egui::Slider::new(&mut bar.repulsion, 0..=100));

            ui.separator();

            egui::ComboBox::from_id_salt("preset")
                .selected_text(preset.label())
                .width(CONTROL_BAR_WIDTH * 0.8)
                .show_ui(ui, |ui| {
                    for candidate in Preset::ALL {
                        ui.selectable_value(&mut preset, candidate, candidate.label());
                    }
                });

            let spawn = world.spawn_settings();
            let (v_min, v_max) = spawn.initial_velocity;
            ui.small(format!(
                "Apparition : disque {:.0} %, v ∈ [{v_min}, {v_max}]",
                spawn.disk_radius_factor * 100.0
            ));

            ui.separator();

            if let Some(seed) = settings.seed {
                ui.small(format!("Graine : {seed}"));
            }
            if ui.button("Rejouer").clicked() {
                reset_events.write(ResetWorld { seed: settings.seed });
            }
            if ui.button("Nouvelle graine").clicked() {
                reset_events.write(ResetWorld { seed: None });
            }

            ui.separator();

            if ui.button("Matrice des forces").clicked() {
                matrix_ui.show_window = !matrix_ui.show_window;
            }

            if *state.get() == SimulationState::Paused {
                ui.colored_label(egui::Color32::YELLOW, "En pause (Espace)");
            }
        });

    if bar != *control_bar {
        bar.clamp();
        *control_bar = bar;
    }

    if preset != settings.preset {
        info!("Variante sélectionnée : {}", preset.label());
        settings.preset = preset;
        reset_events.write(ResetWorld { seed: settings.seed });
    }
}
