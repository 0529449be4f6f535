use eframe::egui::{self, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: data summary and the filled-year marker toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(state.summary());

        ui.separator();

        if ui
            .selectable_label(state.mark_filled, "Mark gap-filled years")
            .clicked()
        {
            state.mark_filled = !state.mark_filled;
        }

        ui.separator();

        if ui.button("Close").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
