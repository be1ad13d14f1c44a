//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Einträge: {} | Sichtbar: {}",
                state.record_count(),
                state.visible_count()
            ));

            ui.separator();

            match state.filter.active_label() {
                Some(label) => ui.label(format!("Filter: {}", label)),
                None => ui.label("Filter: alle"),
            };

            ui.separator();

            ui.label(format!("Zoom: {:.1}", state.view.current_zoom));

            if let Some(id) = state.selection.selected_record_id {
                ui.separator();
                ui.label(format!("Ausgewählt: #{}", id));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
