use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::resources::{particle_types::ParticlePalette, simulation::ParticleWorld};

/// Ressource pour stocker l'état de l'UI
#[derive(Resource, Default)]
pub struct ForceMatrixUI {
    pub show_window: bool,
}

/// Les coefficients sont affichés en unités de 1e-4
const DISPLAY_SCALE: f32 = 1.0e4;

/// Fenêtre (lecture seule) de la matrice d'interaction
pub fn force_matrix_ui(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<ForceMatrixUI>,
    world: Res<ParticleWorld>,
    palette: Res<ParticlePalette>,
) {
    if !ui_state.show_window {
        return;
    }

    let ctx = contexts.ctx_mut();
    let matrix = world.matrix();
    let type_count = matrix.type_count();
    let mut open = true;

    egui::Window::new("Matrice des Forces")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Types de particules: {}", type_count));
            ui.label("Coefficients ×10⁴ (négatif : attraction)");
            ui.separator();

            egui::Grid::new("interaction_matrix")
                .striped(true)
                .show(ui, |ui| {
                    // En-têtes de colonnes
                    ui.label("De\\Vers");
                    for b in 0..type_count {
                        ui.label(type_label(&palette, b));
                    }
                    ui.end_row();

                    for a in 0..type_count {
                        ui.label(type_label(&palette, a));
                        for &c in matrix.row(a) {
                            let value = c * DISPLAY_SCALE;
                            let color = if value < 0.0 {
                                egui::Color32::LIGHT_GREEN
                            } else {
                                egui::Color32::LIGHT_RED
                            };
                            ui.label(egui::RichText::new(format!("{:+.1}", value)).color(color));
                        }
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.label(if matrix.is_symmetric() {
                "Matrice symétrique"
            } else {
                "Matrice non symétrique"
            });
        });

    if !open {
        ui_state.show_window = false;
    }
}

fn type_label(palette: &ParticlePalette, kind: usize) -> egui::RichText {
    egui::RichText::new(format!("Type {}", kind)).color(to_egui_color(palette.color_for_type(kind)))
}

fn to_egui_color(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgb(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
    )
}
