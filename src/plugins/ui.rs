use bevy::prelude::*;
use bevy_egui::{EguiContextPass, EguiPlugin};

use crate::ui::control_bar::control_bar_ui;
use crate::ui::force_matrix::{ForceMatrixUI, force_matrix_ui};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        });
        app.init_resource::<ForceMatrixUI>();

        // La barre d'abord : elle réserve la largeur de gauche
        app.add_systems(
            EguiContextPass,
            (control_bar_ui, force_matrix_ui.after(control_bar_ui)),
        );
    }
}
