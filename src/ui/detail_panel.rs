//! Detailansicht (rechte Seitenleiste) des aktivierten Eintrags.

use crate::app::{AppIntent, AppState};
use crate::core::is_visible;

/// Rendert die Detailansicht und gibt erzeugte Events zurück.
///
/// Nur sichtbar, wenn die Detailansicht aktiviert ist und ein Eintrag
/// ausgewählt wurde. Fehlende Felder werden ausgelassen.
pub fn render_detail_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.options.detail_panel_enabled {
        return events;
    }
    let Some(record) = state.selected_record() else {
        return events;
    };

    egui::SidePanel::right("detail_panel")
        .default_width(240.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading(record.title());
            ui.separator();

            egui::Grid::new("detail_fields")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for field in record.detail_fields() {
                        ui.label(egui::RichText::new(field.label).strong());
                        ui.label(field.value);
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("{:.6}, {:.6}", record.lat, record.lon))
                    .small()
                    .weak(),
            );

            if !is_visible(record, state.filter.attribute, &state.filter.selection) {
                ui.label(
                    egui::RichText::new("Durch den aktiven Filter ausgeblendet")
                        .color(egui::Color32::YELLOW),
                );
            }

            ui.separator();

            if ui.button("Auf Marker zentrieren").clicked() {
                events.push(AppIntent::CenterOnSelectedRequested);
            }
        });

    events
}
